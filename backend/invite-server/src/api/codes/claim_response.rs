use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ClaimResponse {
    pub access: bool,
    pub code: String,
}
