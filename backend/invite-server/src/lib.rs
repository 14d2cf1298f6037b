pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

pub use api::{
    codes::{
        claim_request::ClaimRequest,
        claim_response::ClaimResponse,
        codes::{check_access, claim_code, code_availability},
        access_response::AccessResponse,
        code_availability_response::CodeAvailabilityResponse,
    },
    error::{ApiError, ApiErrorKind, ErrorEnvelope, Result as ApiResult},
    extractors::{auth_identity::AuthIdentity, json_body::JsonBody},
    feed::{
        course_list_response::CourseListResponse,
        feed::{list_courses, list_tests},
        feed_query::FeedQuery,
        feed_response::FeedResponse,
    },
    users::{
        create_user_request::CreateUserRequest,
        user_response::UserResponse,
        users::{create_user, current_user, users_method_not_allowed},
    },
};
pub use app_state::AppState;
pub use metrics::Metrics;
pub use services::{code_issuer::CodeIssuer, code_redeemer::CodeRedeemer};

pub use crate::routes::build_router;
