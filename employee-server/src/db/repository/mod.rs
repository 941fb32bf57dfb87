//! Repository Module
//!
//! Storage seam for employee records. Handlers only see the
//! [`EmployeeRepository`] trait, so the SQLite adapter can be swapped for a
//! test double.

pub mod employee;

// Re-exports
pub use employee::SqliteEmployeeRepository;

use async_trait::async_trait;
use shared::models::{Employee, EmployeeData};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Employee storage
///
/// Ids are assigned by the store, unique and never reused while the process
/// runs. Listing returns records in ascending id order.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert a validated record and return it with its new id
    async fn create(&self, data: EmployeeData) -> RepoResult<Employee>;

    /// All stored records
    async fn find_all(&self) -> RepoResult<Vec<Employee>>;

    /// Replace every field of record `id`; `NotFound` if absent
    async fn update(&self, id: i64, data: EmployeeData) -> RepoResult<Employee>;

    /// Remove record `id`; `NotFound` if absent
    async fn delete(&self, id: i64) -> RepoResult<()>;
}
