//! Database Module
//!
//! Handles the SQLite connection pool and migrations

pub mod repository;

use shared::AppError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;

/// Database service: owns a SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (or create) the database at `url` in WAL mode and apply migrations
    pub async fn new(url: &str) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| AppError::database(format!("Invalid database url: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(std::time::Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(url = %url, "Database connection established (SQLite WAL)");

        Self::migrate(pool).await
    }

    /// Private in-memory database, used by tests
    ///
    /// A single connection that never expires, so every query sees the same
    /// memory database.
    pub async fn in_memory() -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| AppError::database(format!("Invalid database url: {e}")))?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        Self::migrate(pool).await
    }

    async fn migrate(pool: SqlitePool) -> Result<Self, AppError> {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::debug!("Database migrations applied");

        Ok(Self { pool })
    }
}
