#![allow(dead_code)]

//! Test infrastructure for invite-server API tests

use invite_auth::{Claims, JwtValidator};
use invite_core::{Code, Identity, PhoneNumber, User};
use invite_db::{CodeRepository, Database, UserRepository};
use invite_server::{AppState, Metrics};
use invite_sms::{SmsError, SmsSender};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-bytes!!";
pub const TEST_BRAND: &str = "thavma.club";

/// One message handed to the sender
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub to: String,
    pub body: String,
}

/// Records messages instead of delivering them
#[derive(Default)]
pub struct RecordingSender {
    pub sent: Mutex<Vec<SentMessage>>,
}

impl RecordingSender {
    pub fn messages(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl SmsSender for RecordingSender {
    async fn send(&self, to: &PhoneNumber, body: &str) -> invite_sms::Result<()> {
        self.sent.lock().unwrap().push(SentMessage {
            to: to.as_str().to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

/// Always fails like a gateway rejecting the message
pub struct FailingSender;

#[async_trait]
impl SmsSender for FailingSender {
    async fn send(&self, _to: &PhoneNumber, _body: &str) -> invite_sms::Result<()> {
        Err(SmsError::gateway(503, "gateway unavailable"))
    }
}

pub fn app_state(pool: SqlitePool, sms: Arc<dyn SmsSender>) -> AppState {
    AppState {
        pool,
        jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET.as_bytes())),
        sms,
        sms_brand: TEST_BRAND.to_string(),
        default_school: "gunn".to_string(),
        metrics: Metrics::new(),
    }
}

/// AppState over an in-memory database plus the recorder it sends through
pub async fn create_test_app_state() -> (AppState, Arc<RecordingSender>) {
    let pool = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let recorder = Arc::new(RecordingSender::default());
    (app_state(pool, recorder.clone()), recorder)
}

/// Bearer token for `sub`, signed with the test secret
pub fn sign_token(sub: &str) -> String {
    sign_token_expiring(sub, chrono::Utc::now().timestamp() + 3600)
}

pub fn sign_token_expiring(sub: &str, exp: i64) -> String {
    let claims = Claims {
        sub: sub.to_string(),
        exp,
        iat: chrono::Utc::now().timestamp(),
        email: None,
        role: Some("authenticated".to_string()),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("Failed to sign test token")
}

pub fn random_sub() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Insert a user and one unclaimed code with a fixed id
pub async fn create_test_code(pool: &SqlitePool, code_id: &str) -> Identity {
    let creator = Identity::new(random_sub()).unwrap();
    UserRepository::new(pool.clone())
        .create(&User::new(
            creator.clone(),
            PhoneNumber::from_e164("+16505550199"),
        ))
        .await
        .expect("Failed to create code creator");

    CodeRepository::new(pool.clone())
        .create_many(&[Code {
            id: code_id.to_string(),
            creator: creator.clone(),
            user: None,
        }])
        .await
        .expect("Failed to create test code");

    creator
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
