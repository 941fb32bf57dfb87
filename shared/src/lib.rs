//! Shared types for the employee service
//!
//! Domain models and the unified error system used by `employee-server`
//! and by anything that talks to its API.

pub mod error;
pub mod models;

// Re-exports
pub use http;

pub use error::{AppError, AppResult, ErrorCode, ErrorResponse};
pub use models::{Employee, EmployeeCandidate, EmployeeData, NumericInput};
