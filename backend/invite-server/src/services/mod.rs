pub mod code_issuer;
pub mod code_redeemer;
