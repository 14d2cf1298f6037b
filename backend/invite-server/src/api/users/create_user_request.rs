use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Free-form phone number; normalized server-side
    #[serde(default)]
    pub phone: Option<String>,
}
