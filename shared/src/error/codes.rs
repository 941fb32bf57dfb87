//! Unified error codes for the employee service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors (request / validation)
//! - 9xxx: System errors (store / internal)

use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values so they can be logged and compared cheaply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid request (malformed body, wrong content type)
    InvalidRequest = 5,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database / repository error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::InvalidRequest.code(), 5);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::DatabaseError.to_string(), "9002");
        assert_eq!(u16::from(ErrorCode::ValidationFailed), 2);
    }

    #[test]
    fn test_error_code_default_messages() {
        assert_eq!(ErrorCode::ValidationFailed.message(), "Validation failed");
        assert_eq!(ErrorCode::DatabaseError.message(), "Database error");
    }
}
