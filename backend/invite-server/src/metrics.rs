use metrics::counter;

/// Counters for invite issuance and redemption.
///
/// No-ops unless the host installs a recorder.
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "invite" }
    }

    pub fn user_created(&self) {
        counter!(format!("{}.users.created", self.prefix)).increment(1);
    }

    pub fn codes_issued(&self, count: usize) {
        counter!(format!("{}.codes.issued", self.prefix)).increment(count as u64);
    }

    pub fn sms_failed(&self) {
        counter!(format!("{}.sms.failed", self.prefix)).increment(1);
    }

    pub fn code_claimed(&self) {
        counter!(format!("{}.codes.claimed", self.prefix)).increment(1);
    }

    pub fn claim_rejected(&self) {
        counter!(format!("{}.codes.claim_rejected", self.prefix)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
