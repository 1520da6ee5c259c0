//! # Edital CLI - submit spreadsheets from the terminal
//!
//! Native counterpart of the browser app. It reuses the validator, intake
//! and orchestrator from `edital-core` with a `reqwest` transport, and
//! ships a development receiver that speaks the submission endpoint
//! contract so the whole flow can be exercised locally.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  .xlsx file │────▶│   Intake    │────▶│  reqwest    │────▶│  endpoint   │
//! │  (on disk)  │     │ (validate)  │     │ (multipart) │     │ (or `serve`)│
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - CLI error type
//! - [`config`] - Environment-driven configuration
//! - [`files`] - Loading candidate files from disk
//! - [`transport`] - `reqwest` implementation of the submission transport
//! - [`api`] - Development receiver (HTTP server)

pub mod error;
pub mod config;
pub mod files;
pub mod transport;
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CliError, CliResult};
pub use config::{config_from_env, config_from_vars, ENV_ENDPOINT_URL, ENV_MAX_FILE_SIZE, ENV_TEMPLATE_URL};
pub use files::{load_candidate, media_type_for};
pub use transport::ReqwestTransport;
pub use api::{LinkKey, ReceiverState, StoredSubmission};

// Server
pub mod server {
    pub use crate::api::server::{router, serve, start_server};
}
