//! `reqwest` implementation of the submission transport.

use edital_core::{SubmissionRequest, SubmissionTransport, TransportFailure, TransportResponse, FIELD_FILE};
use reqwest::multipart::{Form, Part};

/// Sends submissions with a shared `reqwest::Client`.
///
/// No timeout is configured; the client's defaults apply.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubmissionTransport<Vec<u8>> for ReqwestTransport {
    async fn post(
        &self,
        endpoint: &str,
        request: &SubmissionRequest<'_, Vec<u8>>,
    ) -> Result<TransportResponse, TransportFailure> {
        let form = build_form(request)?;

        let response = self
            .client
            .post(endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransportFailure::Network(format!("HTTP request failed: {}", e)))?;

        let status = response.status().as_u16();
        let response = TransportResponse::from_body_read(status, response.text().await)?;

        log::debug!("Endpoint answered {} ({} bytes)", status, response.body.len());
        Ok(response)
    }
}

fn build_form(request: &SubmissionRequest<'_, Vec<u8>>) -> Result<Form, TransportFailure> {
    let file = request.file;

    let mut part = Part::bytes(file.payload.clone()).file_name(file.name.clone());
    if !file.media_type.is_empty() {
        part = part
            .mime_str(&file.media_type)
            .map_err(|e| TransportFailure::Request(format!("Invalid media type: {}", e)))?;
    }

    let form = request
        .text_fields()
        .into_iter()
        .fold(Form::new().part(FIELD_FILE, part), |form, (name, value)| form.text(name, value));

    Ok(form)
}
