pub mod bearer;
pub mod claims;
pub mod error;
pub mod jwt_algorithm;
pub mod jwt_validator;

pub use bearer::bearer_token;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_algorithm::JwtAlgorithm;
pub use jwt_validator::JwtValidator;

#[cfg(test)]
mod tests;
