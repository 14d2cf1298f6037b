use crate::{DbError, Result as DbErrorResult};

use invite_core::{Identity, PhoneNumber, User};

use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct UserRow {
    id: String,
    phone: String,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    fn try_from(row: UserRow) -> DbErrorResult<Self> {
        let id = Identity::new(row.id).map_err(|e| DbError::corrupt_row("users", e.to_string()))?;
        Ok(User::new(id, PhoneNumber::from_e164(row.phone)))
    }
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the phone for an identity. A second insert for the same
    /// identity fails with a unique violation.
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query("INSERT INTO users (id, phone) VALUES (?, ?)")
            .bind(user.id.as_str())
            .bind(user.phone.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: &Identity) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT id, phone FROM users WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(User::try_from).transpose()
    }
}
