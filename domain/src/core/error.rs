//! Domain error types

use thiserror::Error;

/// Caller input that cannot be turned into a study task.
///
/// These are always client errors: they are reported back immediately and
/// never retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("{field} must be between 1 and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: usize,
        max: usize,
    },

    #[error("Invalid exam date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("hours_per_day must be a positive number, got {0}")]
    InvalidHours(f64),

    #[error("Only PDF files are supported, got '{0}'")]
    UnsupportedFileType(String),
}

impl DomainError {
    /// Check if this error was caused by an empty required field
    pub fn is_empty_field(&self) -> bool {
        matches!(self, DomainError::EmptyField(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let error = DomainError::OutOfRange {
            field: "num_questions",
            value: 0,
            max: 50,
        };
        assert_eq!(
            error.to_string(),
            "num_questions must be between 1 and 50, got 0"
        );
    }

    #[test]
    fn test_is_empty_field_check() {
        assert!(DomainError::EmptyField("text").is_empty_field());
        assert!(!DomainError::InvalidHours(0.0).is_empty_field());
        assert!(!DomainError::InvalidDate("tomorrow".to_string()).is_empty_field());
    }
}
