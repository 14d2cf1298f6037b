use invite_core::{Identity, PhoneNumber, User};
use invite_db::{Database, UserRepository};

use sqlx::SqlitePool;
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    Database::open_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a user row so codes can reference it as creator
pub async fn create_test_user(pool: &SqlitePool) -> Identity {
    let identity = Identity::new(Uuid::new_v4().to_string()).unwrap();
    let user = User::new(identity.clone(), PhoneNumber::from_e164("+16505550100"));

    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");

    identity
}

pub fn random_identity() -> Identity {
    Identity::new(Uuid::new_v4().to_string()).unwrap()
}
