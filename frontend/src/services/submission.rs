//! HTTP transport for submitting spreadsheets from the browser.

use edital_core::{SubmissionRequest, SubmissionTransport, TransportFailure, TransportResponse, FIELD_FILE};
use gloo_net::http::Request;
use web_sys::{File, FormData};

/// `gloo-net` (fetch) implementation of [`SubmissionTransport`].
///
/// One request per call, no timeout beyond the browser's own.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl SubmissionTransport<File> for FetchTransport {
    async fn post(
        &self,
        endpoint: &str,
        request: &SubmissionRequest<'_, File>,
    ) -> Result<TransportResponse, TransportFailure> {
        let form_data = build_form_data(request)?;

        let http_request = Request::post(endpoint)
            .body(form_data)
            .map_err(|e| TransportFailure::Request(format!("Failed to build request: {}", e)))?;

        let response = http_request
            .send()
            .await
            .map_err(|e| TransportFailure::Network(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response = TransportResponse::from_body_read(status, response.text().await)?;

        log::debug!("📥 Endpoint answered {} ({} bytes)", status, response.body.len());
        Ok(response)
    }
}

fn build_form_data(request: &SubmissionRequest<'_, File>) -> Result<FormData, TransportFailure> {
    let form_data = FormData::new()
        .map_err(|e| TransportFailure::Request(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename(FIELD_FILE, &request.file.payload, request.filename())
        .map_err(|e| TransportFailure::Request(format!("Failed to append file: {:?}", e)))?;

    for (name, value) in request.text_fields() {
        form_data
            .append_with_str(name, &value)
            .map_err(|e| TransportFailure::Request(format!("Failed to append {}: {:?}", name, e)))?;
    }

    Ok(form_data)
}
