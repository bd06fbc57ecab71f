//! Validation error types

use std::fmt;

/// Validation error for write payloads.
///
/// Carries the first offending field only; handlers surface it as
/// `{field, kind, message}` detail in the 400 body.
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Required field absent from the payload
    Missing { field: &'static str },

    /// Field present but not of the expected JSON type
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::WrongType { field, .. }
            | Self::Empty { field }
            | Self::TooLong { field, .. } => field,
        }
    }

    /// Machine-readable violation kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "missing",
            Self::WrongType { .. } => "wrong_type",
            Self::Empty { .. } => "empty",
            Self::TooLong { .. } => "too_long",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::WrongType { field, expected } => {
                write!(f, "{} must be a {}", field, expected)
            }
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
