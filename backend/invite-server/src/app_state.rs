use crate::Metrics;

use invite_auth::JwtValidator;
use invite_sms::SmsSender;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt_validator: Arc<JwtValidator>,
    pub sms: Arc<dyn SmsSender>,
    /// First line of the invite text
    pub sms_brand: String,
    /// School used when the feed request has no `s`
    pub default_school: String,
    pub metrics: Metrics,
}
