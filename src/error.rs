//! Error types for devcheck operations.
//!
//! This module defines [`DevcheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DevcheckError` for fatal errors that abort the run (bad config,
//!   broken I/O)
//! - Use `anyhow::Error` (via `DevcheckError::Other`) for unexpected errors
//! - A requirement that is merely *unmet* is not an error: it is reported as
//!   a failed check and aggregated into the overall exit status

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for devcheck operations.
#[derive(Debug, Error)]
pub enum DevcheckError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Generator command could not be spawned.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Interactive prompt gave up after too many invalid answers.
    #[error("No valid value for '{name}' after {attempts} attempts")]
    PromptAttemptsExhausted { name: String, attempts: usize },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for devcheck operations.
pub type Result<T> = std::result::Result<T, DevcheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = DevcheckError::ConfigNotFound {
            path: PathBuf::from("/foo/devenv.json"),
        };
        assert!(err.to_string().contains("/foo/devenv.json"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = DevcheckError::ConfigParseError {
            path: PathBuf::from("/devenv.json"),
            message: "expected value at line 3".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/devenv.json"));
        assert!(msg.contains("expected value at line 3"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = DevcheckError::ConfigValidationError {
            message: "requirement 2: env requirement is missing 'name'".into(),
        };
        assert!(err.to_string().contains("missing 'name'"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = DevcheckError::CommandFailed {
            command: "op read secret".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("op read secret"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn prompt_attempts_exhausted_displays_name_and_count() {
        let err = DevcheckError::PromptAttemptsExhausted {
            name: "API_KEY".into(),
            attempts: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("API_KEY"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DevcheckError = io_err.into();
        assert!(matches!(err, DevcheckError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(DevcheckError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
