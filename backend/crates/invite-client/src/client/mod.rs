pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod responses;

pub use client::Client;
pub use error::{ClientError, Result as ClientResult};
pub use responses::{
    AccessResponse, ClaimResponse, CodeAvailability, CoursesResponse, FeedResponse, UserResponse,
};
