use crate::{DbError, Result as DbErrorResult};

use std::path::Path;
use std::time::Duration;

use log::info;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

/// Schema for users, codes and feed content
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const MAX_CONNECTIONS: u32 = 10;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens SQLite pools with the schema applied
pub struct Database;

impl Database {
    /// Open (or create) the database file and run migrations
    pub async fn open(path: &Path) -> DbErrorResult<SqlitePool> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| {
                    DbError::initialization(format!("Failed to create database directory: {}", e))
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        info!("Database opened: {}", path.display());

        Self::migrate(&pool).await?;

        Ok(pool)
    }

    /// Private in-memory database, single connection
    pub async fn open_in_memory() -> DbErrorResult<SqlitePool> {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .foreign_keys(true);

        // Every new connection to :memory: is a fresh database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::migrate(&pool).await?;

        Ok(pool)
    }

    pub async fn migrate(pool: &SqlitePool) -> DbErrorResult<()> {
        MIGRATOR
            .run(pool)
            .await
            .map_err(|e| DbError::migration(format!("Migration failed: {}", e)))?;

        Ok(())
    }
}
