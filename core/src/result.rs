//! Result hand-off between the orchestrator and the result view.

use serde::{Deserialize, Serialize};

/// Produced by a successful submission; never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    /// Tracking link returned by the endpoint.
    pub link: String,
    /// Trimmed project name the file was submitted under.
    pub project_name: String,
}

/// What the result view should do with the hand-off it received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultView {
    /// Render the link and the project name.
    Show(SubmissionResult),
    /// Nothing to show: go back to the intake view.
    RedirectToIntake,
}

impl ResultView {
    pub fn resolve(handoff: Option<SubmissionResult>) -> Self {
        match handoff {
            Some(result) if !result.link.is_empty() => ResultView::Show(result),
            _ => ResultView::RedirectToIntake,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_shows_result_intact() {
        let result = SubmissionResult {
            link: "https://track/42".into(),
            project_name: "Edital 2024".into(),
        };
        assert_eq!(ResultView::resolve(Some(result.clone())), ResultView::Show(result));
    }

    #[test]
    fn test_resolve_redirects_without_link() {
        assert_eq!(ResultView::resolve(None), ResultView::RedirectToIntake);

        let empty = SubmissionResult {
            link: String::new(),
            project_name: "Edital 2024".into(),
        };
        assert_eq!(ResultView::resolve(Some(empty)), ResultView::RedirectToIntake);
    }
}
