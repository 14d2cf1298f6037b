use crate::{
    AppState, check_access, claim_code, code_availability, create_user, current_user, health,
    list_courses, list_tests, users_method_not_allowed,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Users
        .route(
            "/api/users",
            post(create_user).fallback(users_method_not_allowed),
        )
        .route("/api/users/me", get(current_user))
        // Codes
        .route("/api/codes/claim", post(claim_code))
        .route("/api/codes/{id}", get(code_availability))
        .route("/api/access", get(check_access))
        // Feed
        .route("/api/courses", get(list_courses))
        .route("/api/tests", get(list_tests))
        // Add shared state
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
