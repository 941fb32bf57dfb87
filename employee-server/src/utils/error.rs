//! Error handling
//!
//! Re-exports the unified error system from `shared::error` and maps the
//! server's own failures onto it:
//!
//! | Source | Code | Status |
//! |--------|------|--------|
//! | [`EmployeeFieldError`] | `ValidationFailed` | 400 |
//! | `JsonRejection` (in `shared`) | `InvalidRequest` | 400 |
//!
//! Store failures are mapped by the handlers, each with its own message.

use crate::utils::validation::EmployeeFieldError;

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode, ErrorResponse};

impl From<EmployeeFieldError> for AppError {
    fn from(err: EmployeeFieldError) -> Self {
        AppError::validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_field_error_is_bad_request() {
        let err: AppError = EmployeeFieldError::RoleTooShort.into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "role must be at least 3 characters.");
    }
}
