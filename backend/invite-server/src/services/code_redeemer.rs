//! Code redemption and the access check.
//!
//! The `UPDATE ... WHERE user IS NULL` in `CodeRepository::claim` is the only
//! thing that decides a claim. The lookup before it only short-circuits
//! obviously dead codes.

use crate::{AppState, Metrics};

use invite_core::{ClaimOutcome, Identity};
use invite_db::{CodeRepository, Result as DbErrorResult};

use log::{debug, info};

pub struct CodeRedeemer<'a> {
    codes: CodeRepository,
    metrics: &'a Metrics,
}

impl<'a> CodeRedeemer<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            codes: CodeRepository::new(state.pool.clone()),
            metrics: &state.metrics,
        }
    }

    pub async fn redeem(&self, code: &str, identity: &Identity) -> DbErrorResult<ClaimOutcome> {
        if self.codes.find_unclaimed(code).await?.is_none() {
            debug!("Code ({}) unknown or already claimed", code);
            self.metrics.claim_rejected();
            return Ok(ClaimOutcome::Unavailable);
        }

        let outcome = self.codes.claim(code, identity).await?;
        match outcome {
            ClaimOutcome::Claimed => {
                info!("Code ({}) claimed by user ({})", code, identity);
                self.metrics.code_claimed();
            }
            ClaimOutcome::Unavailable => {
                debug!("Code ({}) lost the claim race", code);
                self.metrics.claim_rejected();
            }
        }

        Ok(outcome)
    }

    /// True once the identity holds any code. Idempotent.
    pub async fn has_access(&self, identity: &Identity) -> DbErrorResult<bool> {
        self.codes.has_claimed(identity).await
    }

    pub async fn is_available(&self, code: &str) -> DbErrorResult<bool> {
        Ok(self.codes.find_unclaimed(code).await?.is_some())
    }
}
