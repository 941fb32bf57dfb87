//! Employee payload validation
//!
//! Checks an untrusted [`EmployeeCandidate`] field by field in a fixed order
//! (name, email, age, role, salary) and stops at the first failure, so a
//! client only ever sees one message. On success the candidate is coerced
//! into a strict [`EmployeeData`].

use std::sync::LazyLock;

use regex::Regex;
use shared::models::{EmployeeCandidate, EmployeeData, NumericInput};
use thiserror::Error;

// ── Field rules ─────────────────────────────────────────────────────

/// Minimum characters for `name`
pub const MIN_NAME_LEN: usize = 3;

/// Minimum characters for `role`
pub const MIN_ROLE_LEN: usize = 3;

/// Minimum accepted `age`
pub const MIN_AGE: i64 = 18;

/// `local-part@domain.tld`, no whitespace and a single `@`
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
});

/// First failing field of an employee payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmployeeFieldError {
    #[error("name must be at least 3 characters.")]
    NameTooShort,

    #[error("invalid email.")]
    InvalidEmail,

    #[error("age must be greater than or equal to 18.")]
    AgeTooLow,

    #[error("role must be at least 3 characters.")]
    RoleTooShort,

    #[error("salary cannot be negative.")]
    NegativeSalary,
}

/// Validate a candidate and coerce it into a strict record.
///
/// `Ok` means "no error". Missing text fields fail their length check,
/// age `0` counts as not provided, salary `0` is accepted.
pub fn validate_employee(
    candidate: &EmployeeCandidate,
) -> Result<EmployeeData, EmployeeFieldError> {
    let name = min_chars(candidate.name.as_deref(), MIN_NAME_LEN)
        .ok_or(EmployeeFieldError::NameTooShort)?;

    let email = candidate
        .email
        .as_deref()
        .filter(|e| EMAIL_RE.is_match(e))
        .ok_or(EmployeeFieldError::InvalidEmail)?;

    let age = coerce_age(candidate.age.as_ref()).ok_or(EmployeeFieldError::AgeTooLow)?;

    let role = min_chars(candidate.role.as_deref(), MIN_ROLE_LEN)
        .ok_or(EmployeeFieldError::RoleTooShort)?;

    let salary = candidate
        .salary
        .as_ref()
        .and_then(NumericInput::to_number)
        .filter(|s| *s >= 0.0)
        .ok_or(EmployeeFieldError::NegativeSalary)?;

    Ok(EmployeeData {
        name: name.to_string(),
        age,
        email: email.to_string(),
        role: role.to_string(),
        salary,
    })
}

fn min_chars(value: Option<&str>, min: usize) -> Option<&str> {
    value.filter(|v| v.chars().count() >= min)
}

fn coerce_age(age: Option<&NumericInput>) -> Option<i64> {
    let age = age?.to_number()?;
    // 0 is "not provided"; fractional ages are never stored
    if age == 0.0 || age.fract() != 0.0 || age < MIN_AGE as f64 || age >= i64::MAX as f64 {
        return None;
    }
    Some(age as i64)
}
