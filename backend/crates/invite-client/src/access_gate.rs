//! Access gate
//!
//! Derives the tri-state access flag from the current session and landing
//! URL, and re-derives it on every session change:
//!
//! | session    | URL                 | access                        |
//! |------------|---------------------|-------------------------------|
//! | signed out | `#access` handoff   | `Unset`                       |
//! | signed out | otherwise           | `Denied`                      |
//! | signed in  | `?code=...`         | claim; `Granted` or `Denied`  |
//! | signed in  | no code             | any claimed code? `Granted`   |
//!
//! Ledger failures (network, unknown code) degrade to `Denied`.

use crate::{Client, ClientResult, LandingUrl, Session};

use invite_core::{Access, ClaimOutcome};

use async_trait::async_trait;
use log::{debug, warn};
use tokio::sync::watch;

/// Server-side code operations the gate depends on
#[async_trait]
pub trait CodeLedger: Send + Sync {
    async fn claim(&self, token: &str, code: &str) -> ClientResult<ClaimOutcome>;
    async fn has_access(&self, token: &str) -> ClientResult<bool>;
}

#[async_trait]
impl CodeLedger for Client {
    async fn claim(&self, token: &str, code: &str) -> ClientResult<ClaimOutcome> {
        match self.with_token(Some(token)).claim_code(code).await {
            Ok(response) => Ok(ClaimOutcome::from(response.access)),
            Err(e) if e.status() == Some(409) => Ok(ClaimOutcome::Unavailable),
            Err(e) => Err(e),
        }
    }

    async fn has_access(&self, token: &str) -> ClientResult<bool> {
        let response = self.with_token(Some(token)).check_access().await?;
        Ok(response.access)
    }
}

pub struct AccessGate<L> {
    ledger: L,
    landing: LandingUrl,
}

impl<L: CodeLedger> AccessGate<L> {
    pub fn new(ledger: L, landing: LandingUrl) -> Self {
        Self { ledger, landing }
    }

    pub fn landing(&self) -> &LandingUrl {
        &self.landing
    }

    /// Evaluate the flag for one session.
    ///
    /// A successful claim consumes the landing code, so later session changes
    /// (token refresh) fall back to the idempotent access check instead of
    /// claiming again.
    pub async fn derive(&mut self, session: &Session) -> Access {
        let Some(token) = session.token() else {
            return if self.landing.is_login_handoff() {
                Access::Unset
            } else {
                Access::Denied
            };
        };

        if let Some(code) = self.landing.code() {
            return match self.ledger.claim(token, code).await {
                Ok(ClaimOutcome::Claimed) => {
                    debug!("Invite code {} redeemed", code);
                    self.landing = std::mem::take(&mut self.landing).without_code();
                    Access::Granted
                }
                Ok(ClaimOutcome::Unavailable) => {
                    debug!("Invite code {} unavailable", code);
                    Access::Denied
                }
                Err(e) => {
                    warn!("Failed to redeem invite code {}: {}", code, e);
                    Access::Denied
                }
            };
        }

        match self.ledger.has_access(token).await {
            Ok(granted) => Access::from(granted),
            Err(e) => {
                warn!("Failed to check access: {}", e);
                Access::Denied
            }
        }
    }

    /// Drive the gate until the session channel closes.
    ///
    /// The access channel starts `Unset` and is replaced after each
    /// evaluation; receivers only wake when the value actually changes.
    pub async fn run(mut self, mut sessions: watch::Receiver<Session>, access: watch::Sender<Access>) {
        loop {
            let session = sessions.borrow_and_update().clone();
            let next = self.derive(&session).await;
            access.send_if_modified(|current| {
                if *current == next {
                    false
                } else {
                    *current = next;
                    true
                }
            });

            if sessions.changed().await.is_err() {
                debug!("Session channel closed, access gate stopping");
                break;
            }
        }
    }
}
