use crate::{DbError, Result as DbErrorResult};

use invite_core::{ClaimOutcome, Code, Identity};

use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct CodeRow {
    id: String,
    creator: String,
    user: Option<String>,
}

impl TryFrom<CodeRow> for Code {
    type Error = DbError;

    fn try_from(row: CodeRow) -> DbErrorResult<Self> {
        let creator =
            Identity::new(row.creator).map_err(|e| DbError::corrupt_row("codes", e.to_string()))?;
        let user = row
            .user
            .map(Identity::new)
            .transpose()
            .map_err(|e| DbError::corrupt_row("codes", e.to_string()))?;

        Ok(Code {
            id: row.id,
            creator,
            user,
        })
    }
}

pub struct CodeRepository {
    pool: SqlitePool,
}

impl CodeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert all codes in one transaction; either every row lands or none
    pub async fn create_many(&self, codes: &[Code]) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        for code in codes {
            sqlx::query(r#"INSERT INTO codes (id, creator, "user") VALUES (?, ?, ?)"#)
                .bind(&code.id)
                .bind(code.creator.as_str())
                .bind(code.user.as_ref().map(Identity::as_str))
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<Code>> {
        let row = sqlx::query_as::<_, CodeRow>(
            r#"SELECT id, creator, "user" AS user FROM codes WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Code::try_from).transpose()
    }

    /// Optimistic pre-check: the code exists and nobody holds it yet.
    /// Never a substitute for [`CodeRepository::claim`].
    pub async fn find_unclaimed(&self, id: &str) -> DbErrorResult<Option<Code>> {
        let row = sqlx::query_as::<_, CodeRow>(
            r#"SELECT id, creator, "user" AS user FROM codes WHERE id = ? AND "user" IS NULL"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Code::try_from).transpose()
    }

    /// Compare-and-set `user` from NULL to `identity`. The WHERE clause is
    /// the only guard against double redemption.
    pub async fn claim(&self, id: &str, identity: &Identity) -> DbErrorResult<ClaimOutcome> {
        let result = sqlx::query(r#"UPDATE codes SET "user" = ? WHERE id = ? AND "user" IS NULL"#)
            .bind(identity.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(ClaimOutcome::from_rows_affected(result.rows_affected()))
    }

    /// Whether `identity` already holds a claimed code
    pub async fn has_claimed(&self, identity: &Identity) -> DbErrorResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM codes WHERE "user" = ?)"#)
                .bind(identity.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    pub async fn find_by_creator(&self, creator: &Identity) -> DbErrorResult<Vec<Code>> {
        let rows = sqlx::query_as::<_, CodeRow>(
            r#"SELECT id, creator, "user" AS user FROM codes WHERE creator = ? ORDER BY rowid ASC"#,
        )
        .bind(creator.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Code::try_from).collect()
    }
}
