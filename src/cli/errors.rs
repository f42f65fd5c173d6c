//! CLI error types
//!
//! Every CLI failure is terminal: it is printed once by main and the
//! process exits non-zero.

use thiserror::Error;

use crate::client::ClientError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Async runtime could not be created
    #[error("Failed to start runtime: {0}")]
    Runtime(String),

    /// Server boot or serve-loop failure
    #[error("Server error: {0}")]
    Server(String),

    /// Upload failure
    #[error("Error uploading file: {0}")]
    Upload(#[from] ClientError),
}
