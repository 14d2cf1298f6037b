//! Phone submission: verify, persist, mint, text.

use crate::{ApiResult, AppState, Metrics};

use invite_core::{Code, Identity, PhoneNumber, User};
use invite_db::{CodeRepository, UserRepository};
use invite_sms::{SmsSender, invite_message};

use log::{error, info};

pub struct CodeIssuer<'a> {
    users: UserRepository,
    codes: CodeRepository,
    sms: &'a dyn SmsSender,
    brand: &'a str,
    metrics: &'a Metrics,
}

impl<'a> CodeIssuer<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            users: UserRepository::new(state.pool.clone()),
            codes: CodeRepository::new(state.pool.clone()),
            sms: state.sms.as_ref(),
            brand: &state.sms_brand,
            metrics: &state.metrics,
        }
    }

    /// Single attempt, no retries.
    ///
    /// The user row and both codes stay persisted when the text fails; the
    /// caller still gets an error.
    pub async fn issue(&self, identity: &Identity, raw_phone: &str) -> ApiResult<User> {
        info!("Verifying phone for user ({})...", identity);
        let phone = PhoneNumber::parse(raw_phone)?;

        info!("Inserting phone ({}) for user ({})...", phone, identity);
        let user = User::new(identity.clone(), phone);
        self.users.create(&user).await?;
        self.metrics.user_created();

        info!("Inserting codes for user ({})...", identity);
        let codes = Code::mint_pair(identity);
        self.codes.create_many(&codes).await?;
        self.metrics.codes_issued(codes.len());

        info!("Sending codes via text ({})...", user.phone);
        let ids: Vec<&str> = codes.iter().map(|c| c.id.as_str()).collect();
        let body = invite_message(self.brand, &ids);
        if let Err(e) = self.sms.send(&user.phone, &body).await {
            error!(
                "Codes for user ({}) persisted but text to {} failed",
                identity, user.phone
            );
            self.metrics.sms_failed();
            return Err(e.into());
        }

        Ok(user)
    }
}
