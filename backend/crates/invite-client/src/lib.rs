//! invite-client library
//!
//! HTTP client for the invite server, plus the access gate that turns
//! session changes into a tri-state access flag.

pub(crate) mod access_gate;
pub(crate) mod client;
pub(crate) mod landing_url;
pub(crate) mod navigation;
pub(crate) mod session;

#[cfg(test)]
mod tests;

pub use access_gate::{AccessGate, CodeLedger};
pub use client::{
    AccessResponse, ClaimResponse, Client, ClientError, ClientResult, CodeAvailability,
    CoursesResponse, FeedResponse, UserResponse,
};
pub use landing_url::LandingUrl;
pub use navigation::{Page, redirect_for};
pub use session::Session;
