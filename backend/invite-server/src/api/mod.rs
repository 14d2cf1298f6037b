pub mod codes;
pub mod error;
pub mod extractors;
pub mod feed;
pub mod users;
