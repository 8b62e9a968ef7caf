//! # CLI Errors
//!
//! All CLI errors are fatal: the process prints them and exits non-zero.

use std::io;

use thiserror::Error;

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error.
#[derive(Debug, Error)]
pub enum CliError {
    /// Server failed to boot or exited unexpectedly.
    #[error("STREAMLENS_BOOT_FAILED: {0}")]
    BootFailed(String),

    /// stdout or stderr failure.
    #[error("STREAMLENS_IO_ERROR: {0}")]
    Io(#[from] io::Error),

    /// Fixture serialization failure.
    #[error("STREAMLENS_JSON_ERROR: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Boot failure with a message.
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        CliError::BootFailed(msg.into())
    }
}
