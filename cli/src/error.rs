//! Error type for the `edital` binary.
//!
//! Wraps the core errors so `?` works from file loading through submission.

use edital_core::{SubmitError, ValidationRejected};
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid environment or flag value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read the input file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The file failed the type/size policy.
    #[error("{0}")]
    Rejected(#[from] ValidationRejected),

    /// The submission attempt failed.
    #[error("Submission failed: {0}")]
    Submit(#[from] SubmitError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Development receiver failure.
    #[error("Server error: {0}")]
    Server(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use edital_core::{MissingInput, RejectionReason};

    #[test]
    fn test_error_conversion_chain() {
        let rejected = ValidationRejected {
            file_name: "notes.pdf".into(),
            reason: RejectionReason::InvalidType,
        };
        let err: CliError = rejected.into();
        assert!(err.to_string().contains("notes.pdf"));

        let err: CliError = SubmitError::from(MissingInput::ProjectName).into();
        assert!(err.to_string().starts_with("Submission failed"));
    }
}
