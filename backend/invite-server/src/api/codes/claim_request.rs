use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ClaimRequest {
    #[serde(default)]
    pub code: String,
}
