//! Environment-driven configuration.
//!
//! Precedence, lowest first: `edital-core` defaults, environment (a `.env`
//! file is loaded by `main`), command-line flags.

use edital_core::UploaderConfig;

use crate::error::{CliError, CliResult};

/// Overrides the submission endpoint.
pub const ENV_ENDPOINT_URL: &str = "EDITAL_ENDPOINT_URL";
/// Overrides the template URL.
pub const ENV_TEMPLATE_URL: &str = "EDITAL_TEMPLATE_URL";
/// Overrides the maximum file size, in bytes.
pub const ENV_MAX_FILE_SIZE: &str = "EDITAL_MAX_FILE_SIZE";

/// Build the configuration from the process environment.
pub fn config_from_env() -> CliResult<UploaderConfig> {
    config_from_vars(|name| std::env::var(name).ok())
}

/// Build the configuration from an arbitrary variable lookup.
pub fn config_from_vars<F>(lookup: F) -> CliResult<UploaderConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = UploaderConfig::default();

    if let Some(url) = non_blank(lookup(ENV_ENDPOINT_URL)) {
        config.endpoint_url = url;
    }
    if let Some(url) = non_blank(lookup(ENV_TEMPLATE_URL)) {
        config.template_url = url;
    }
    if let Some(raw) = non_blank(lookup(ENV_MAX_FILE_SIZE)) {
        config.max_file_size_bytes = raw.parse().map_err(|_| {
            CliError::Config(format!("{} must be a byte count, got '{}'", ENV_MAX_FILE_SIZE, raw))
        })?;
    }

    Ok(config)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = config_from_vars(vars(&[])).unwrap();
        assert_eq!(config, UploaderConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let config = config_from_vars(vars(&[
            (ENV_ENDPOINT_URL, "http://localhost:3000/api/submissions"),
            (ENV_TEMPLATE_URL, "  "),
            (ENV_MAX_FILE_SIZE, "2048"),
        ]))
        .unwrap();

        assert_eq!(config.endpoint_url, "http://localhost:3000/api/submissions");
        assert_eq!(config.template_url, UploaderConfig::default().template_url);
        assert_eq!(config.max_file_size_bytes, 2048);
    }

    #[test]
    fn test_invalid_max_size() {
        let err = config_from_vars(vars(&[(ENV_MAX_FILE_SIZE, "ten megs")])).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("ten megs"));
    }
}
