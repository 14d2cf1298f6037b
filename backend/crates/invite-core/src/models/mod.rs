pub mod access;
pub mod claim_outcome;
pub mod code;
pub mod code_token;
pub mod course;
pub mod identity;
pub mod phone_number;
pub mod user;
