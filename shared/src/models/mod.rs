//! Data models
//!
//! Shared between employee-server and its API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod employee;

// Re-exports
pub use employee::*;
