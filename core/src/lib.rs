//! # Edital Core - spreadsheet intake and submission
//!
//! Platform-free logic shared by the Leptos frontend and the `edital` CLI.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Candidate  │────▶│  Validator  │────▶│   Intake    │────▶│ Submission  │
//! │    File     │     │ (type/size) │     │ (one file)  │     │ (multipart) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └──────┬──────┘
//!                                                                    │
//!                                                             ┌──────▼──────┐
//!                                                             │ ResultView  │
//!                                                             │ (link+name) │
//!                                                             └─────────────┘
//! ```
//!
//! The network call itself is abstracted behind [`SubmissionTransport`] so
//! that the browser (`gloo-net`) and the CLI (`reqwest`) share the same
//! precondition checks and response interpretation.
//!
//! ## Modules
//!
//! - [`config`] - Injected configuration (endpoint, limits, allowed types)
//! - [`error`] - Error taxonomy
//! - [`file`] - Candidate file model
//! - [`validator`] - Type and size policy
//! - [`intake`] - Single-file intake state machine
//! - [`submission`] - Submission orchestrator and transport trait
//! - [`result`] - Result hand-off and presentation state
//! - [`notice`] - User-facing notices

// Core modules
pub mod config;
pub mod error;
pub mod file;

// Intake
pub mod validator;
pub mod intake;

// Submission
pub mod submission;
pub mod result;

// Presentation
pub mod notice;

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{
    UploaderConfig,
    DEFAULT_ENDPOINT_URL,
    DEFAULT_TEMPLATE_URL,
    DEFAULT_MAX_FILE_SIZE,
    DEFAULT_SPREADSHEET_EXTENSION,
    XLSX_MEDIA_TYPE,
    XLSM_MEDIA_TYPE,
};

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{
    ClipboardError,
    MissingInput,
    RejectionReason,
    SubmitError,
    SubmitResult,
    TransportFailure,
    ValidationRejected,
    ValidationResult,
};

// =============================================================================
// Re-exports - Intake
// =============================================================================

pub use file::CandidateFile;
pub use validator::validate;
pub use intake::{IntakeState, UploadIntake};

// =============================================================================
// Re-exports - Submission
// =============================================================================

pub use submission::{
    extract_link,
    submit,
    FlightGuard,
    SingleFlight,
    SubmissionRequest,
    SubmissionTransport,
    TransportResponse,
    FIELD_FILE,
    FIELD_FILENAME,
    FIELD_PROJECT_NAME,
    FIELD_TIMESTAMP,
    LINK_KEYS,
};
pub use result::{ResultView, SubmissionResult};

// =============================================================================
// Re-exports - Notices
// =============================================================================

pub use notice::{Notice, Severity};
