pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::access::Access;
pub use models::claim_outcome::ClaimOutcome;
pub use models::code::Code;
pub use models::code_token::{CODE_TOKEN_ALPHABET, CODE_TOKEN_LENGTH, mint_code_token};
pub use models::course::Course;
pub use models::identity::Identity;
pub use models::phone_number::PhoneNumber;
pub use models::study_test::StudyTest;
pub use models::user::User;

#[cfg(test)]
mod tests;
