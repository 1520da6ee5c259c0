//! Uploader configuration.
//!
//! Everything the intake and submission flow needs to know about the outside
//! world is carried by [`UploaderConfig`], which is built once at startup and
//! passed explicitly to the validator, the intake and the transports.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Default submission endpoint.
pub const DEFAULT_ENDPOINT_URL: &str = "https://api.exemplo.com/webhook";

/// Default location of the downloadable spreadsheet template.
pub const DEFAULT_TEMPLATE_URL: &str = "/template_edital.csv";

/// Maximum accepted file size (in bytes).
///
/// 10 MiB limit.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Filename suffix accepted even when the browser misreports the media type.
pub const DEFAULT_SPREADSHEET_EXTENSION: &str = ".xlsx";

/// Media type of an Office Open XML workbook.
pub const XLSX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Media type of a macro-enabled Office Open XML workbook.
pub const XLSM_MEDIA_TYPE: &str = "application/vnd.ms-excel.sheet.macroEnabled.12";

/// Configuration injected into the uploader at startup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploaderConfig {
    /// Where submissions are POSTed.
    pub endpoint_url: String,
    /// Where the template spreadsheet can be downloaded.
    pub template_url: String,
    /// Files strictly larger than this are rejected.
    pub max_file_size_bytes: u64,
    /// Declared media types accepted as spreadsheets.
    pub allowed_media_types: BTreeSet<String>,
    /// Fallback filename suffix for misreported media types.
    pub spreadsheet_extension: String,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            template_url: DEFAULT_TEMPLATE_URL.to_string(),
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE,
            allowed_media_types: [XLSX_MEDIA_TYPE, XLSM_MEDIA_TYPE]
                .into_iter()
                .map(String::from)
                .collect(),
            spreadsheet_extension: DEFAULT_SPREADSHEET_EXTENSION.to_string(),
        }
    }
}

impl UploaderConfig {
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = url.into();
        self
    }

    pub fn with_template_url(mut self, url: impl Into<String>) -> Self {
        self.template_url = url.into();
        self
    }

    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size_bytes = bytes;
        self
    }

    /// Human readable size limit, e.g. `10MB`.
    pub fn max_file_size_label(&self) -> String {
        let mib = self.max_file_size_bytes as f64 / (1024.0 * 1024.0);
        if mib.fract() == 0.0 {
            format!("{}MB", mib as u64)
        } else {
            format!("{:.1}MB", mib)
        }
    }

    /// Value for the `accept` attribute of a file input.
    pub fn accept_attribute(&self) -> String {
        std::iter::once(self.spreadsheet_extension.clone())
            .chain(self.allowed_media_types.iter().cloned())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UploaderConfig::default();
        assert_eq!(config.max_file_size_bytes, 10_485_760);
        assert!(config.allowed_media_types.contains(XLSX_MEDIA_TYPE));
        assert!(config.allowed_media_types.contains(XLSM_MEDIA_TYPE));
        assert_eq!(config.spreadsheet_extension, ".xlsx");
        assert_eq!(config.max_file_size_label(), "10MB");
    }

    #[test]
    fn test_partial_deserialization_keeps_defaults() {
        let config: UploaderConfig =
            serde_json::from_str(r#"{"endpoint_url": "http://localhost:3000/api/submissions"}"#)
                .unwrap();
        assert_eq!(config.endpoint_url, "http://localhost:3000/api/submissions");
        assert_eq!(config.max_file_size_bytes, DEFAULT_MAX_FILE_SIZE);
        assert_eq!(config.template_url, DEFAULT_TEMPLATE_URL);
    }

    #[test]
    fn test_accept_attribute_starts_with_extension() {
        let accept = UploaderConfig::default().accept_attribute();
        assert!(accept.starts_with(".xlsx,"));
        assert!(accept.contains(XLSX_MEDIA_TYPE));
    }
}
