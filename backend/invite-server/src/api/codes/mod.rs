pub mod access_response;
pub mod claim_request;
pub mod claim_response;
pub mod code_availability_response;
#[allow(clippy::module_inception)]
pub mod codes;
