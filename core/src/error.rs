//! Error types for the intake and submission flow.
//!
//! - [`ValidationRejected`] - a candidate file failed the type/size policy
//! - [`MissingInput`] - submission attempted without a file or project name
//! - [`TransportFailure`] - what a transport reports when the request fails
//! - [`SubmitError`] - every way a submission attempt can end badly
//! - [`ClipboardError`] - the best-effort copy action failed
//!
//! All of them are terminal for the current attempt; nothing is retried.

use thiserror::Error;

// =============================================================================
// Validation Errors
// =============================================================================

/// Why the validator refused a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RejectionReason {
    /// Neither the media type nor the filename suffix is a spreadsheet.
    #[error("invalid file type")]
    InvalidType,

    /// The file exceeds the configured maximum size.
    #[error("file too large")]
    TooLarge,
}

/// A candidate file was refused by the intake.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("File '{file_name}' rejected: {reason}")]
pub struct ValidationRejected {
    pub file_name: String,
    pub reason: RejectionReason,
}

// =============================================================================
// Submission Errors
// =============================================================================

/// Which precondition of a submission was not met.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MissingInput {
    /// No file is held by the intake.
    #[error("no file selected")]
    File,

    /// Project name is empty or whitespace only.
    #[error("project name is empty")]
    ProjectName,
}

/// Failure reported by a [`crate::SubmissionTransport`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransportFailure {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The request could not be assembled (bad URL, unreadable file...).
    #[error("Request error: {0}")]
    Request(String),
}

/// Errors ending a submission attempt.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Precondition failure; no network call was made.
    #[error("Missing input: {0}")]
    MissingInput(#[from] MissingInput),

    /// Network failure or non-2xx HTTP status.
    #[error("{}", transport_message(.status, .message))]
    TransportError {
        status: Option<u16>,
        message: String,
    },

    /// 2xx response without any recognised link field.
    #[error("Response did not contain a tracking link")]
    MalformedResponse,
}

fn transport_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("Server error ({}): {}", code, message),
        None => format!("Transport error: {}", message),
    }
}

impl From<TransportFailure> for SubmitError {
    fn from(failure: TransportFailure) -> Self {
        SubmitError::TransportError {
            status: None,
            message: failure.to_string(),
        }
    }
}

impl SubmitError {
    /// HTTP status of a transport failure, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            SubmitError::TransportError { status, .. } => *status,
            _ => None,
        }
    }
}

// =============================================================================
// Clipboard Errors
// =============================================================================

/// The copy-to-clipboard action failed. Never fatal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Clipboard error: {0}")]
pub struct ClipboardError(pub String);

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for validation.
pub type ValidationResult<T> = Result<T, ValidationRejected>;

/// Result type for submissions.
pub type SubmitResult<T> = Result<T, SubmitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_failure_conversion() {
        let err: SubmitError = TransportFailure::Network("connection refused".into()).into();
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_transport_error_format_with_status() {
        let err = SubmitError::TransportError {
            status: Some(502),
            message: "Bad Gateway".into(),
        };
        assert_eq!(err.to_string(), "Server error (502): Bad Gateway");
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_missing_input_conversion() {
        let err: SubmitError = MissingInput::ProjectName.into();
        assert_eq!(err, SubmitError::MissingInput(MissingInput::ProjectName));
        assert!(err.to_string().contains("project name"));
    }
}
