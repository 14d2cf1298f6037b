use crate::{Result, SmsSender};

use invite_core::PhoneNumber;

use async_trait::async_trait;
use log::info;

/// Writes messages to the log instead of sending them.
#[derive(Debug, Clone, Default)]
pub struct LogSender;

#[async_trait]
impl SmsSender for LogSender {
    async fn send(&self, to: &PhoneNumber, body: &str) -> Result<()> {
        info!("SMS disabled, message to {}: {:?}", to, body);
        Ok(())
    }
}
