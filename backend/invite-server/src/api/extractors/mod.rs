pub mod auth_identity;
pub mod json_body;
