use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SMS_API_BASE, DEFAULT_SMS_BRAND, DEFAULT_SMS_ENABLED,
};

use invite_core::PhoneNumber;

use serde::Deserialize;

/// Outbound text messages. When disabled, messages are written to the log.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SmsConfig {
    pub enabled: bool,
    pub account_sid: Option<String>,
    pub auth_token: Option<String>,
    /// Sender number, E.164
    pub from_phone: Option<String>,
    pub api_base: String,
    /// First line of the invite message
    pub brand: String,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_SMS_ENABLED,
            account_sid: None,
            auth_token: None,
            from_phone: None,
            api_base: String::from(DEFAULT_SMS_API_BASE),
            brand: String::from(DEFAULT_SMS_BRAND),
        }
    }
}

impl SmsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.api_base.starts_with("https://") || self.api_base.starts_with("http://")) {
            return Err(ConfigError::sms("sms.api_base must be an http(s) URL"));
        }

        if !self.enabled {
            return Ok(());
        }

        if self.account_sid.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::sms("sms.account_sid is required when sms is enabled"));
        }
        if self.auth_token.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::sms("sms.auth_token is required when sms is enabled"));
        }

        match self.from_phone.as_deref() {
            None => Err(ConfigError::sms("sms.from_phone is required when sms is enabled")),
            Some(phone) if !is_e164(phone) => Err(ConfigError::sms(format!(
                "sms.from_phone must be E.164 (e.g. +16505550100), got {}",
                phone
            ))),
            Some(_) => Ok(()),
        }
    }
}

/// Canonical E.164 that also passes number-plan validation
fn is_e164(phone: &str) -> bool {
    PhoneNumber::parse(phone).is_ok_and(|parsed| parsed.as_str() == phone)
}
