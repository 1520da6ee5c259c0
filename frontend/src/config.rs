//! Application configuration.
//!
//! The endpoint and template URLs are baked in at build time. Set
//! `EDITAL_ENDPOINT_URL` / `EDITAL_TEMPLATE_URL` when running `trunk build`
//! to point the app elsewhere; otherwise the defaults from `edital-core`
//! apply.

use edital_core::{UploaderConfig, DEFAULT_ENDPOINT_URL, DEFAULT_TEMPLATE_URL};

/// Submission endpoint.
pub const ENDPOINT_URL: &str = match option_env!("EDITAL_ENDPOINT_URL") {
    Some(url) => url,
    None => DEFAULT_ENDPOINT_URL,
};

/// Downloadable spreadsheet template.
pub const TEMPLATE_URL: &str = match option_env!("EDITAL_TEMPLATE_URL") {
    Some(url) => url,
    None => DEFAULT_TEMPLATE_URL,
};

/// Page title.
pub const APP_NAME: &str = "Análise de Editais";

/// How long a toast stays on screen (in milliseconds).
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Maximum toasts visible at once.
pub const MAX_TOASTS: usize = 3;

/// Configuration injected into the component tree at startup.
pub fn uploader_config() -> UploaderConfig {
    UploaderConfig::default()
        .with_endpoint(ENDPOINT_URL)
        .with_template_url(TEMPLATE_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uploader_config_uses_build_urls() {
        let config = uploader_config();
        assert_eq!(config.endpoint_url, ENDPOINT_URL);
        assert_eq!(config.template_url, TEMPLATE_URL);
        assert_eq!(config.max_file_size_bytes, edital_core::DEFAULT_MAX_FILE_SIZE);
    }
}
