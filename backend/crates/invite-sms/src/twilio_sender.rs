use crate::{Result, SmsError, SmsSender};

use invite_core::PhoneNumber;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;

const MESSAGES_API_VERSION: &str = "2010-04-01";

#[derive(Debug, Clone)]
pub struct TwilioOptions {
    pub account_sid: String,
    pub auth_token: String,
    pub from: PhoneNumber,
    /// e.g. "https://api.twilio.com"
    pub api_base: String,
}

/// Twilio Messages API client.
#[derive(Debug, Clone)]
pub struct TwilioSender {
    options: TwilioOptions,
    client: Client,
}

/// Error payload returned by Twilio on non-2xx responses
#[derive(Debug, Deserialize)]
struct TwilioErrorBody {
    code: Option<i64>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TwilioMessage {
    sid: Option<String>,
}

impl TwilioSender {
    pub fn new(options: TwilioOptions) -> Self {
        Self {
            options,
            client: Client::new(),
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/{}/Accounts/{}/Messages.json",
            self.options.api_base.trim_end_matches('/'),
            MESSAGES_API_VERSION,
            self.options.account_sid
        )
    }
}

#[async_trait]
impl SmsSender for TwilioSender {
    async fn send(&self, to: &PhoneNumber, body: &str) -> Result<()> {
        let form = [
            ("To", to.as_str()),
            ("From", self.options.from.as_str()),
            ("Body", body),
        ];

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.options.account_sid, Some(&self.options.auth_token))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<TwilioErrorBody>(&text) {
                Ok(TwilioErrorBody {
                    code: Some(code),
                    message: Some(message),
                }) => format!("{} (twilio code {})", message, code),
                Ok(TwilioErrorBody {
                    message: Some(message),
                    ..
                }) => message,
                _ => text,
            };
            warn!("Twilio rejected message to {}: {}", to, message);
            return Err(SmsError::gateway(status.as_u16(), message));
        }

        let sid = response
            .json::<TwilioMessage>()
            .await
            .ok()
            .and_then(|m| m.sid)
            .unwrap_or_default();
        debug!("Twilio accepted message to {} (sid {})", to, sid);

        Ok(())
    }
}
