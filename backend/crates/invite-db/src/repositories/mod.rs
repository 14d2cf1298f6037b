pub mod code_repository;
pub mod feed_repository;
pub mod user_repository;
