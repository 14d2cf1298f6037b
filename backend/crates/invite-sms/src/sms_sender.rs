use crate::Result;

use invite_core::PhoneNumber;

use async_trait::async_trait;

/// Delivers a single text message. One attempt, no retries.
#[async_trait]
pub trait SmsSender: Send + Sync {
    async fn send(&self, to: &PhoneNumber, body: &str) -> Result<()>;
}
