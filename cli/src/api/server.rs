//! HTTP server for the development receiver.
//!
//! Accepts submissions exactly as the real endpoint would and answers with
//! a tracking link that points back at itself.
//!
//! # API Endpoints
//!
//! | Method | Path                       | Description                     |
//! |--------|----------------------------|---------------------------------|
//! | GET    | `/health`                  | Health check                    |
//! | POST   | `/api/submissions`         | Multipart submission            |
//! | GET    | `/api/submissions/{id}`    | Registered submission (link)    |

use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use edital_core::{FIELD_FILE, FIELD_FILENAME, FIELD_PROJECT_NAME, FIELD_TIMESTAMP};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use super::types::{accepted_response, error_response, LinkKey, StoredSubmission};
use crate::error::{CliError, CliResult};

/// Request bodies above this size are refused before reaching the handler.
const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

type ApiError = (StatusCode, Json<Value>);

/// Shared state of the receiver.
#[derive(Clone, Debug)]
pub struct ReceiverState {
    registry: Arc<RwLock<HashMap<String, StoredSubmission>>>,
    link_key: LinkKey,
    public_url: String,
}

impl ReceiverState {
    pub fn new(link_key: LinkKey, public_url: impl Into<String>) -> Self {
        Self {
            registry: Arc::new(RwLock::new(HashMap::new())),
            link_key,
            public_url: public_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Number of submissions received so far.
    pub async fn len(&self) -> usize {
        self.registry.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.registry.read().await.is_empty()
    }

    fn tracking_link(&self, id: &str) -> String {
        format!("{}/api/submissions/{}", self.public_url, id)
    }
}

/// Build the receiver's router.
pub fn router(state: ReceiverState) -> Router {
    // The browser app posts from another origin during development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/api/submissions", post(receive_submission))
        .route("/api/submissions/{id}", get(show_submission))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .with_state(state)
}

/// Serve on an already bound listener.
pub async fn serve(listener: TcpListener, state: ReceiverState) -> CliResult<()> {
    axum::serve(listener, router(state))
        .await
        .map_err(|e| CliError::Server(e.to_string()))
}

/// Start the HTTP server
pub async fn start_server(port: u16, link_key: LinkKey, public_url: Option<String>) -> CliResult<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let public_url = public_url.unwrap_or_else(|| format!("http://localhost:{}", port));

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| CliError::Server(format!("Failed to bind {}: {}", addr, e)))?;

    eprintln!("🚀 Edital receiver running on http://localhost:{}", port);
    eprintln!("   POST /api/submissions      - Receive a spreadsheet");
    eprintln!("   GET  /api/submissions/{{id}} - Show a received submission");
    eprintln!("   GET  /health               - Health check");
    eprintln!();
    eprintln!("🔗 Links are returned under '{}'", link_key.as_str());

    serve(listener, ReceiverState::new(link_key, public_url)).await
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "edital-receiver",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Submission endpoint
async fn receive_submission(
    State(state): State<ReceiverState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let mut file_size: Option<usize> = None;
    let mut fields: HashMap<String, String> = HashMap::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(&format!("Multipart error: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == FIELD_FILE {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| bad_request(&format!("Read error: {}", e)))?;
            file_size = Some(bytes.len());
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| bad_request(&format!("Read error: {}", e)))?;
            fields.insert(name, value);
        }
    }

    let size = file_size.ok_or_else(|| bad_request("No file provided"))?;
    let project_name = required(&fields, FIELD_PROJECT_NAME)?;
    let timestamp = required(&fields, FIELD_TIMESTAMP)?;
    let filename = required(&fields, FIELD_FILENAME)?;

    let submission = StoredSubmission {
        id: Uuid::new_v4().to_string(),
        project_name,
        filename,
        timestamp,
        size,
        received_at: Utc::now(),
    };

    log::info!(
        "📄 New submission {}: {} ({} bytes) for '{}'",
        submission.id,
        submission.filename,
        submission.size,
        submission.project_name
    );

    let link = state.tracking_link(&submission.id);
    let body = accepted_response(state.link_key, &link, &submission.project_name);

    state
        .registry
        .write()
        .await
        .insert(submission.id.clone(), submission);

    Ok(Json(body))
}

/// Registered submission lookup
async fn show_submission(
    State(state): State<ReceiverState>,
    Path(id): Path<String>,
) -> Result<Json<StoredSubmission>, ApiError> {
    state
        .registry
        .read()
        .await
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, Json(error_response("Submission not found"))))
}

fn required(fields: &HashMap<String, String>, name: &str) -> Result<String, ApiError> {
    fields
        .get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| bad_request(&format!("Missing field: {}", name)))
}

fn bad_request(message: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(error_response(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::ReqwestTransport;
    use edital_core::{submit, CandidateFile, MissingInput, SubmitError, UploaderConfig, XLSX_MEDIA_TYPE};
    use reqwest::multipart::Form;

    /// Bind the receiver on an ephemeral port and return its base URL.
    async fn spawn_receiver(link_key: LinkKey) -> (String, ReceiverState) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let state = ReceiverState::new(link_key, base.clone());

        let served = state.clone();
        tokio::spawn(async move {
            serve(listener, served).await.unwrap();
        });

        (base, state)
    }

    fn xlsx(size: usize) -> CandidateFile {
        CandidateFile::from_bytes("edital.xlsx", XLSX_MEDIA_TYPE, vec![1u8; size])
    }

    #[tokio::test]
    async fn test_end_to_end_submission() {
        let (base, state) = spawn_receiver(LinkKey::ResultLink).await;
        let config = UploaderConfig::default().with_endpoint(format!("{}/api/submissions", base));
        let file = xlsx(5 * 1024 * 1024);

        let result = submit(&ReqwestTransport::new(), &config, Some(&file), "Edital 2024")
            .await
            .unwrap();

        assert_eq!(result.project_name, "Edital 2024");
        assert!(result.link.starts_with(&format!("{}/api/submissions/", base)));
        assert_eq!(state.len().await, 1);

        let stored: StoredSubmission = reqwest::get(&result.link).await.unwrap().json().await.unwrap();
        assert_eq!(stored.project_name, "Edital 2024");
        assert_eq!(stored.filename, "edital.xlsx");
        assert_eq!(stored.size, 5 * 1024 * 1024);
        assert!(stored.timestamp.ends_with('Z'));
    }

    #[tokio::test]
    async fn test_blank_project_never_reaches_receiver() {
        let (base, state) = spawn_receiver(LinkKey::Link).await;
        let config = UploaderConfig::default().with_endpoint(format!("{}/api/submissions", base));
        let file = xlsx(10);

        let err = submit(&ReqwestTransport::new(), &config, Some(&file), "")
            .await
            .unwrap_err();

        assert_eq!(err, SubmitError::MissingInput(MissingInput::ProjectName));
        assert!(state.is_empty().await);
    }

    #[tokio::test]
    async fn test_non_2xx_is_transport_error() {
        let (base, _state) = spawn_receiver(LinkKey::Link).await;
        let config = UploaderConfig::default().with_endpoint(format!("{}/nowhere", base));
        let file = xlsx(10);

        let err = submit(&ReqwestTransport::new(), &config, Some(&file), "Edital 2024")
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_has_no_status() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = UploaderConfig::default().with_endpoint(format!("http://{}/api/submissions", addr));
        let file = xlsx(10);

        let err = submit(&ReqwestTransport::new(), &config, Some(&file), "Edital 2024")
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitError::TransportError { status: None, .. }));
    }

    #[tokio::test]
    async fn test_missing_fields_are_rejected() {
        let (base, state) = spawn_receiver(LinkKey::Link).await;

        let form = Form::new()
            .text(FIELD_TIMESTAMP, "2024-03-01T12:00:00.000Z")
            .text(FIELD_PROJECT_NAME, "   ")
            .text(FIELD_FILENAME, "edital.xlsx")
            .part(FIELD_FILE, reqwest::multipart::Part::bytes(vec![1u8, 2, 3]).file_name("edital.xlsx"));

        let response = reqwest::Client::new()
            .post(format!("{}/api/submissions", base))
            .multipart(form)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
        let body: Value = response.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().contains(FIELD_PROJECT_NAME));
        assert!(state.is_empty().await);
    }

    #[tokio::test]
    async fn test_unknown_submission_is_404() {
        let (base, _state) = spawn_receiver(LinkKey::Link).await;

        let response = reqwest::get(format!("{}/api/submissions/does-not-exist", base))
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health() {
        let (base, _state) = spawn_receiver(LinkKey::Link).await;

        let body: Value = reqwest::get(format!("{}/health", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["status"], "ok");
    }
}
