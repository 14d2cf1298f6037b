pub mod connection;
pub mod error;
pub mod repositories;
pub mod seed;

pub use connection::database::{Database, MIGRATOR};
pub use error::{DbError, Result};
pub use repositories::code_repository::CodeRepository;
pub use repositories::feed_repository::FeedRepository;
pub use repositories::user_repository::UserRepository;
pub use seed::ContentSeed;
