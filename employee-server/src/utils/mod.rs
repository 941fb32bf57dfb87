//! Utilities - shared helpers and types
//!
//! - [`AppError`] - unified application error (from shared::error)
//! - [`validation`] - employee payload rules
//! - logging setup

pub mod error;
pub mod logger;
pub mod validation;

// Re-export error types from the error module (which re-exports from shared)
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode, ErrorResponse};
pub use validation::{EmployeeFieldError, validate_employee};
