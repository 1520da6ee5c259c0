//! Submission orchestrator.
//!
//! Turns the held file and the project name into one multipart POST and
//! interprets the endpoint's answer:
//!
//! ```text
//! file + project name ──▶ SubmissionRequest ──▶ transport.post() ──▶ TransportResponse
//!                                                                        │
//!                       SubmissionResult ◀── extract_link(body) ◀── 2xx ─┘
//! ```
//!
//! The HTTP client is hidden behind [`SubmissionTransport`]; the frontend
//! plugs in `gloo-net`, the CLI plugs in `reqwest`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use std::cell::Cell;
use std::rc::Rc;

use crate::config::UploaderConfig;
use crate::error::{MissingInput, SubmitError, SubmitResult, TransportFailure};
use crate::file::CandidateFile;
use crate::result::SubmissionResult;

/// Multipart field carrying the file contents.
pub const FIELD_FILE: &str = "file";
/// Multipart field carrying the ISO-8601 submission time.
pub const FIELD_TIMESTAMP: &str = "timestamp";
/// Multipart field carrying the trimmed project name.
pub const FIELD_PROJECT_NAME: &str = "project_name";
/// Multipart field carrying the original filename.
pub const FIELD_FILENAME: &str = "filename";

/// Response keys that may hold the tracking link, in precedence order.
pub const LINK_KEYS: [&str; 3] = ["link", "url", "result_link"];

// =============================================================================
// Request / Response
// =============================================================================

/// One submission attempt. Only constructible when both inputs are present.
#[derive(Debug)]
pub struct SubmissionRequest<'a, P> {
    pub file: &'a CandidateFile<P>,
    pub project_name: String,
    pub timestamp: DateTime<Utc>,
}

impl<'a, P> SubmissionRequest<'a, P> {
    /// Check the preconditions and build the request.
    ///
    /// The project name is trimmed; it is checked before the file.
    pub fn new(
        file: Option<&'a CandidateFile<P>>,
        project_name: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, MissingInput> {
        let project_name = project_name.trim();
        if project_name.is_empty() {
            return Err(MissingInput::ProjectName);
        }
        let file = file.ok_or(MissingInput::File)?;

        Ok(Self {
            file,
            project_name: project_name.to_string(),
            timestamp,
        })
    }

    pub fn filename(&self) -> &str {
        &self.file.name
    }

    /// Timestamp as sent on the wire, e.g. `2024-03-01T12:00:00.000Z`.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Text fields of the multipart body, in sending order.
    ///
    /// The file itself goes under [`FIELD_FILE`] and is added by the
    /// transport, which knows how to stream its payload type.
    pub fn text_fields(&self) -> [(&'static str, String); 3] {
        [
            (FIELD_TIMESTAMP, self.timestamp_iso()),
            (FIELD_PROJECT_NAME, self.project_name.clone()),
            (FIELD_FILENAME, self.file.name.clone()),
        ]
    }
}

/// Raw HTTP outcome as seen by a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Build a response from a status and the outcome of reading its body.
    ///
    /// An unreadable body only fails the request on 2xx; otherwise the
    /// status is kept and the body is treated as empty.
    pub fn from_body_read<E: std::fmt::Display>(
        status: u16,
        body: Result<String, E>,
    ) -> Result<Self, TransportFailure> {
        match body {
            Ok(body) => Ok(Self::new(status, body)),
            Err(e) if (200..300).contains(&status) => Err(TransportFailure::Network(format!(
                "Failed to read response: {}",
                e
            ))),
            Err(e) => {
                log::warn!("⚠️ Unreadable body on status {}: {}", status, e);
                Ok(Self::new(status, String::new()))
            }
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// =============================================================================
// Transport
// =============================================================================

/// Sends a multipart submission and reports the raw response.
///
/// Implementations must issue exactly one request per call and must not
/// retry. A response with any status code is `Ok`; `Err` is reserved for
/// requests that never got a response.
#[allow(async_fn_in_trait)]
pub trait SubmissionTransport<P> {
    async fn post(
        &self,
        endpoint: &str,
        request: &SubmissionRequest<'_, P>,
    ) -> Result<TransportResponse, TransportFailure>;
}

// =============================================================================
// Orchestration
// =============================================================================

/// Submit the held file under `project_name` to the configured endpoint.
///
/// Fails with [`SubmitError::MissingInput`] without touching the transport
/// when the file is absent or the name is blank.
pub async fn submit<P, T>(
    transport: &T,
    config: &UploaderConfig,
    file: Option<&CandidateFile<P>>,
    project_name: &str,
) -> SubmitResult<SubmissionResult>
where
    T: SubmissionTransport<P>,
{
    let request = SubmissionRequest::new(file, project_name, Utc::now()).map_err(|missing| {
        log::warn!("⚠️ Submission blocked: {}", missing);
        missing
    })?;

    log::info!(
        "📤 Submitting {} for project '{}' to {}",
        request.filename(),
        request.project_name,
        config.endpoint_url
    );

    let response = transport
        .post(&config.endpoint_url, &request)
        .await
        .map_err(|failure| {
            log::error!("❌ Transport failure: {}", failure);
            SubmitError::from(failure)
        })?;

    let result = interpret_response(&response, &request.project_name);
    match &result {
        Ok(ok) => log::info!("✅ Tracking link received: {}", ok.link),
        Err(e) => log::error!("❌ Submission failed: {}", e),
    }
    result
}

/// Map a raw response to a result for `project_name`.
pub fn interpret_response(
    response: &TransportResponse,
    project_name: &str,
) -> SubmitResult<SubmissionResult> {
    if !response.is_success() {
        return Err(SubmitError::TransportError {
            status: Some(response.status),
            message: error_excerpt(&response.body),
        });
    }

    let body: Value =
        serde_json::from_str(&response.body).map_err(|_| SubmitError::MalformedResponse)?;

    let link = extract_link(&body).ok_or(SubmitError::MalformedResponse)?;

    Ok(SubmissionResult {
        link: link.to_string(),
        project_name: project_name.to_string(),
    })
}

/// First non-empty string found under [`LINK_KEYS`], in order.
pub fn extract_link(body: &Value) -> Option<&str> {
    let object = body.as_object()?;
    LINK_KEYS
        .iter()
        .filter_map(|key| object.get(*key).and_then(Value::as_str))
        .find(|link| !link.is_empty())
}

fn error_excerpt(body: &str) -> String {
    const MAX_CHARS: usize = 200;

    let body = body.trim();
    if body.is_empty() {
        return "empty response".to_string();
    }
    match body.char_indices().nth(MAX_CHARS) {
        Some((cut, _)) => format!("{}…", &body[..cut]),
        None => body.to_string(),
    }
}

// =============================================================================
// Single-flight latch
// =============================================================================

/// Guarantees at most one outstanding submission per page.
#[derive(Clone, Debug, Default)]
pub struct SingleFlight {
    busy: Rc<Cell<bool>>,
}

/// Held while a submission is in flight; releases the latch on drop.
#[derive(Debug)]
pub struct FlightGuard {
    busy: Rc<Cell<bool>>,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the latch, or `None` if a submission is already running.
    pub fn try_begin(&self) -> Option<FlightGuard> {
        if self.busy.replace(true) {
            return None;
        }
        Some(FlightGuard {
            busy: self.busy.clone(),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

impl Drop for FlightGuard {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}
