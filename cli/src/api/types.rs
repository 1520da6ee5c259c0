//! Wire types of the development receiver.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use edital_core::LINK_KEYS;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Which response key carries the tracking link.
///
/// Lets the receiver mimic endpoints that answer with `url` or
/// `result_link` instead of `link`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LinkKey {
    #[default]
    #[value(name = "link")]
    Link,
    #[value(name = "url")]
    Url,
    #[value(name = "result_link")]
    ResultLink,
}

impl LinkKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKey::Link => LINK_KEYS[0],
            LinkKey::Url => LINK_KEYS[1],
            LinkKey::ResultLink => LINK_KEYS[2],
        }
    }
}

/// A submission registered by the receiver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredSubmission {
    pub id: String,
    pub project_name: String,
    pub filename: String,
    /// Timestamp sent by the client, verbatim.
    pub timestamp: String,
    /// Size of the uploaded file part, in bytes.
    pub size: usize,
    pub received_at: DateTime<Utc>,
}

/// Body returned for an accepted submission.
pub fn accepted_response(key: LinkKey, link: &str, project_name: &str) -> Value {
    let mut body = Map::new();
    body.insert(key.as_str().to_string(), Value::String(link.to_string()));
    body.insert("project_name".to_string(), Value::String(project_name.to_string()));
    Value::Object(body)
}

/// Create an error response
pub fn error_response(error: &str) -> Value {
    json!({ "error": error })
}

#[cfg(test)]
mod tests {
    use super::*;
    use edital_core::extract_link;

    #[test]
    fn test_accepted_response_is_readable_by_the_orchestrator() {
        for key in [LinkKey::Link, LinkKey::Url, LinkKey::ResultLink] {
            let body = accepted_response(key, "https://track/42", "Edital 2024");
            assert_eq!(extract_link(&body), Some("https://track/42"));
            assert_eq!(body["project_name"], "Edital 2024");
        }
    }

    #[test]
    fn test_stored_submission_uses_wire_field_names() {
        let stored = StoredSubmission {
            id: "42".into(),
            project_name: "Edital 2024".into(),
            filename: "edital.xlsx".into(),
            timestamp: "2024-03-01T12:00:00.000Z".into(),
            size: 10,
            received_at: chrono::Utc::now(),
        };

        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value["project_name"], "Edital 2024");
        assert!(value.get("received_at").is_some());
        assert!(value.get("projectName").is_none());
    }

    #[test]
    fn test_link_key_names() {
        assert_eq!(LinkKey::ResultLink.as_str(), "result_link");
        assert_eq!(LinkKey::from_str("result_link", false).unwrap(), LinkKey::ResultLink);
    }
}
