//! Error types for LetterBox.

use thiserror::Error;

/// Common error type for LetterBox.
#[derive(Error, Debug)]
pub enum LetterboxError {
    /// Database error.
    ///
    /// Generic database error wrapping anything the sqlx backend reports.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Authentication error.
    #[error("authentication error: {0}")]
    Auth(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Duplicate resource (unique constraint).
    #[error("conflict: {0}")]
    Conflict(String),

    /// External AI collaborator failure.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for LetterboxError {
    fn from(e: sqlx::Error) -> Self {
        LetterboxError::Database(e.to_string())
    }
}

/// Result type alias for LetterBox operations.
pub type Result<T> = std::result::Result<T, LetterboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        let err = LetterboxError::Auth("invalid password".to_string());
        assert_eq!(err.to_string(), "authentication error: invalid password");
    }

    #[test]
    fn test_validation_error_display() {
        let err = LetterboxError::Validation("title is empty".to_string());
        assert_eq!(err.to_string(), "validation error: title is empty");
    }

    #[test]
    fn test_not_found_error_display() {
        let err = LetterboxError::NotFound("letter".to_string());
        assert_eq!(err.to_string(), "letter not found");
    }

    #[test]
    fn test_conflict_error_display() {
        let err = LetterboxError::Conflict("email already registered".to_string());
        assert_eq!(err.to_string(), "conflict: email already registered");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LetterboxError = io_err.into();
        assert!(matches!(err, LetterboxError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(LetterboxError::Auth("test".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }

    #[test]
    fn test_upstream_error_display() {
        let err = LetterboxError::Upstream("completion call failed".to_string());
        assert_eq!(err.to_string(), "upstream error: completion call failed");
    }
}
