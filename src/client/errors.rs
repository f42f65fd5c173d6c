//! # Client Errors
//!
//! Error types for the upload client.

use thiserror::Error;

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Upload client errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// A required metadata field was left empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The artifact file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// I/O error reading the artifact file
    #[error("I/O error: {0}")]
    Io(String),

    /// Transport-level failure talking to the server
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with something other than success
    #[error("Unexpected status code {0}: {1}")]
    UnexpectedStatus(u16, String),
}
