//! Error category classification

use super::codes::ErrorCode;

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Get the category for a numeric error code
    pub fn from_code(code: u16) -> Self {
        match code / 1000 {
            9 => ErrorCategory::System,
            _ => ErrorCategory::General,
        }
    }
}

impl ErrorCode {
    /// Get the category this error code belongs to
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(2), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(5), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(9002), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::ValidationFailed.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }
}
