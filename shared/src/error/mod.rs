//! Unified error system for the employee service
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes
//! - [`ErrorCategory`]: Classification of errors by code range
//! - [`AppError`]: Error type with code and client-facing message
//! - [`ErrorResponse`]: The `{"error": ...}` body sent to clients
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors (mapped to 400)
//! - 9xxx: System errors (mapped to 500, logged)
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::validation("invalid email.");
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//! assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::ErrorCode;
pub use types::{AppError, AppResult, ErrorResponse};
