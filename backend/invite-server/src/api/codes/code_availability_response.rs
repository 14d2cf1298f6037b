use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct CodeAvailabilityResponse {
    pub id: String,
    pub available: bool,
}
