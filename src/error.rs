//! Error types for key-event-reporter.
//!
//! A key without a printable character is not an error; it takes the
//! named-key path in [`crate::key`]. Everything here is fatal to the run.

use std::io;
use thiserror::Error;

/// Main error type for key-event-reporter operations.
#[derive(Error, Debug)]
pub enum ReporterError {
    /// Writing or flushing the output stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A record could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform input hook could not be installed or stopped running.
    #[error("input hook error: {0}")]
    Hook(String),

    /// The listener thread panicked.
    #[error("listener thread '{name}' panicked")]
    HookThread { name: String },
}

/// Result type alias for key-event-reporter operations.
pub type Result<T> = std::result::Result<T, ReporterError>;

impl ReporterError {
    /// Create a new Hook error.
    pub fn hook(message: impl Into<String>) -> Self {
        Self::Hook(message.into())
    }

    /// Create a new HookThread error.
    pub fn hook_thread(name: impl Into<String>) -> Self {
        Self::HookThread { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReporterError::hook("missing input monitoring permission");
        assert_eq!(
            err.to_string(),
            "input hook error: missing input monitoring permission"
        );

        let err = ReporterError::hook_thread("key-hook");
        assert_eq!(err.to_string(), "listener thread 'key-hook' panicked");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed");
        let err: ReporterError = io_err.into();
        assert!(matches!(err, ReporterError::Io(_)));
        assert!(err.to_string().contains("stdout closed"));
    }
}
