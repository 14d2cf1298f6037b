//! Query parameters the site reads from the page URL.
//!
//! `code` is the invite code being redeemed, `s` the school and `c` the
//! course of the feed. A fragment starting with `access` marks the return
//! leg of the login redirect (the provider appends `#access_token=...`).

use crate::{ClientError, ClientResult};

use reqwest::Url;

const LOGIN_HANDOFF_FRAGMENT: &str = "access";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandingUrl {
    code: Option<String>,
    school: Option<String>,
    course: Option<String>,
    login_handoff: bool,
}

impl LandingUrl {
    #[track_caller]
    pub fn parse(url: &str) -> ClientResult<Self> {
        let url = Url::parse(url).map_err(|e| ClientError::invalid_url(e.to_string()))?;
        Ok(Self::from_url(&url))
    }

    pub fn from_url(url: &Url) -> Self {
        let mut landing = Self {
            login_handoff: url
                .fragment()
                .is_some_and(|f| f.starts_with(LOGIN_HANDOFF_FRAGMENT)),
            ..Self::default()
        };

        // First occurrence wins; empty values count as absent
        for (key, value) in url.query_pairs() {
            let slot = match key.as_ref() {
                "code" => &mut landing.code,
                "s" => &mut landing.school,
                "c" => &mut landing.course,
                _ => continue,
            };
            if slot.is_none() && !value.is_empty() {
                *slot = Some(value.into_owned());
            }
        }

        landing
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn school(&self) -> Option<&str> {
        self.school.as_deref()
    }

    pub fn course(&self) -> Option<&str> {
        self.course.as_deref()
    }

    pub fn is_login_handoff(&self) -> bool {
        self.login_handoff
    }

    /// Drop the invite code once it has been redeemed
    pub fn without_code(mut self) -> Self {
        self.code = None;
        self
    }
}
