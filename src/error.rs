//! Error types for lockstamp.
//!
//! Uses thiserror for derive macros. Every failure that names a file carries
//! its path.

use crate::exit_codes;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lockstamp operations.
///
/// Each variant maps to a specific process exit code for the CLI.
#[derive(Error, Debug)]
pub enum LockstampError {
    /// The file handle could not be opened (permissions, missing parent, disk full).
    #[error("failed to open '{}': {source}", .path.display())]
    OpenFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The OS refused the advisory lock request on an open handle.
    #[error("failed to lock '{}': {source}", .path.display())]
    LockFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The operation is not allowed in the instance's current lock state.
    #[error("invalid lock state for '{}': {reason}", .path.display())]
    InvalidState { path: PathBuf, reason: String },

    /// Reading, writing, truncating or unlinking the file failed.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration could not be read, parsed or validated.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),
}

impl LockstampError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LockstampError::OpenFailure { .. } => exit_codes::LOCK_FAILURE,
            LockstampError::LockFailed { .. } => exit_codes::LOCK_FAILURE,
            LockstampError::InvalidState { .. } => exit_codes::USER_ERROR,
            LockstampError::Io { .. } => exit_codes::IO_FAILURE,
            LockstampError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            LockstampError::UserError(_) => exit_codes::USER_ERROR,
        }
    }

    /// Wrap an I/O failure on `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LockstampError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for lockstamp operations.
pub type Result<T> = std::result::Result<T, LockstampError>;
