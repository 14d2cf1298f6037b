//! Feed REST API handlers

use crate::{
    ApiError, ApiResult, AppState, AuthIdentity, CodeRedeemer, CourseListResponse, FeedQuery,
    FeedResponse,
};

use invite_db::FeedRepository;

use axum::{
    Json,
    extract::{Query, State},
};

/// GET /api/courses
pub async fn list_courses(State(state): State<AppState>) -> ApiResult<Json<CourseListResponse>> {
    let repo = FeedRepository::new(state.pool.clone());
    let courses = repo.list_courses().await?;

    Ok(Json(CourseListResponse { courses }))
}

/// GET /api/tests?s=&c=
///
/// Only callers holding a redeemed code may read the feed.
pub async fn list_tests(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
    Query(query): Query<FeedQuery>,
) -> ApiResult<Json<FeedResponse>> {
    if !CodeRedeemer::new(&state).has_access(&identity).await? {
        return Err(ApiError::forbidden("Access denied"));
    }

    let school = query
        .school
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| state.default_school.clone());

    let repo = FeedRepository::new(state.pool.clone());
    let course = match query.course.filter(|c| !c.trim().is_empty()) {
        Some(id) => repo.find_course(&id).await?,
        None => repo.list_courses().await?.into_iter().next(),
    };

    let tests = match course {
        Some(ref course) => repo.list_tests_by_course(&course.id).await?,
        None => Vec::new(),
    };

    Ok(Json(FeedResponse {
        school,
        course,
        tests,
    }))
}
