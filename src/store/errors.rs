//! # Store Errors
//!
//! Error types for artifact store operations.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Artifact store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// I/O error during store operations
    #[error("I/O error: {0}")]
    Io(String),

    /// A metadata sidecar exists but does not parse
    #[error("Malformed metadata sidecar {0}: {1}")]
    Parse(String, String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::Io(_) => 500,
            StoreError::Parse(_, _) => 500,
            StoreError::Internal(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(StoreError::Io("disk full".to_string()).status_code(), 500);
        assert_eq!(
            StoreError::Parse("x.meta".to_string(), "expected value".to_string()).status_code(),
            500
        );
        assert_eq!(
            StoreError::Internal("broken".to_string()).status_code(),
            500
        );
    }

    #[test]
    fn test_error_display() {
        let error = StoreError::Parse("abc.meta".to_string(), "trailing comma".to_string());
        assert_eq!(
            error.to_string(),
            "Malformed metadata sidecar abc.meta: trailing comma"
        );
    }
}
