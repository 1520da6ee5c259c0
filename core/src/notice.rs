//! User-facing notices.
//!
//! Every outcome of the flow, good or bad, maps to one [`Notice`]. The
//! frontend renders them as toasts, the CLI prints them on stderr.

use crate::config::UploaderConfig;
use crate::error::{ClipboardError, MissingInput, RejectionReason, SubmitError, ValidationRejected};

/// Notice severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "toast-success",
            Severity::Error => "toast-error",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            Severity::Success => "✅",
            Severity::Error => "❌",
        }
    }
}

/// A short title and a sentence for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    fn success(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            severity: Severity::Success,
        }
    }

    fn error(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            severity: Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn file_accepted(file_name: &str) -> Self {
        Self::success(
            "Arquivo carregado!",
            format!("{} foi carregado com sucesso.", file_name),
        )
    }

    pub fn file_rejected(rejection: &ValidationRejected, config: &UploaderConfig) -> Self {
        match rejection.reason {
            RejectionReason::InvalidType => Self::error(
                "Arquivo inválido",
                format!(
                    "Por favor, envie apenas arquivos Excel ({}).",
                    config.spreadsheet_extension
                ),
            ),
            RejectionReason::TooLarge => Self::error(
                "Arquivo muito grande",
                format!(
                    "O arquivo deve ter no máximo {}.",
                    config.max_file_size_label()
                ),
            ),
        }
    }

    pub fn submission_failed(error: &SubmitError) -> Self {
        match error {
            SubmitError::MissingInput(MissingInput::File) => Self::error(
                "Arquivo ausente",
                "Por favor, carregue um arquivo Excel antes de enviar.",
            ),
            SubmitError::MissingInput(MissingInput::ProjectName) => Self::error(
                "Nome do projeto ausente",
                "Por favor, informe o nome do projeto antes de enviar.",
            ),
            SubmitError::TransportError { .. } | SubmitError::MalformedResponse => Self::error(
                "Erro no processamento",
                "Falha ao processar o arquivo. Verifique a configuração e tente novamente.",
            ),
        }
    }

    pub fn submission_succeeded() -> Self {
        Self::success(
            "Arquivo enviado!",
            "O processamento foi iniciado com sucesso.",
        )
    }

    pub fn link_copied() -> Self {
        Self::success(
            "Link copiado!",
            "O link foi copiado para a área de transferência.",
        )
    }

    pub fn clipboard_failed(_error: &ClipboardError) -> Self {
        Self::error("Erro", "Falha ao copiar o link.")
    }

    pub fn template_requested() -> Self {
        Self::success("Template baixado!", "O arquivo modelo está sendo baixado.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(reason: RejectionReason) -> ValidationRejected {
        ValidationRejected {
            file_name: "x".into(),
            reason,
        }
    }

    #[test]
    fn test_failure_categories_are_distinct() {
        let config = UploaderConfig::default();
        let notices = [
            Notice::file_rejected(&rejected(RejectionReason::InvalidType), &config),
            Notice::file_rejected(&rejected(RejectionReason::TooLarge), &config),
            Notice::submission_failed(&SubmitError::MissingInput(MissingInput::ProjectName)),
            Notice::submission_failed(&SubmitError::MalformedResponse),
            Notice::clipboard_failed(&ClipboardError("denied".into())),
        ];

        for (i, a) in notices.iter().enumerate() {
            assert!(a.is_error());
            for b in notices.iter().skip(i + 1) {
                assert_ne!(a.title, b.title);
            }
        }
    }

    #[test]
    fn test_transport_and_malformed_share_wording() {
        let transport = Notice::submission_failed(&SubmitError::TransportError {
            status: Some(503),
            message: "unavailable".into(),
        });
        assert_eq!(transport, Notice::submission_failed(&SubmitError::MalformedResponse));
    }

    #[test]
    fn test_too_large_mentions_limit() {
        let config = UploaderConfig::default();
        let notice = Notice::file_rejected(&rejected(RejectionReason::TooLarge), &config);
        assert!(notice.description.contains("10MB"));
    }
}
