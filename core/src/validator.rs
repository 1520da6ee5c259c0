//! Type and size policy for candidate files.
//!
//! A file is a spreadsheet when its declared media type is in the allow-set
//! or, because some browsers report an empty or generic type for workbooks,
//! when its name ends with the configured extension. The type check runs
//! before the size check.

use crate::config::UploaderConfig;
use crate::error::RejectionReason;
use crate::file::CandidateFile;

/// Decide whether `file` may be accepted under `config`.
///
/// # Example
///
/// ```
/// use edital_core::{validate, CandidateFile, RejectionReason, UploaderConfig};
///
/// let config = UploaderConfig::default();
/// let csv = CandidateFile::from_bytes("notes.csv", "text/csv", vec![1, 2, 3]);
/// assert_eq!(validate(&config, &csv), Err(RejectionReason::InvalidType));
/// ```
pub fn validate<P>(config: &UploaderConfig, file: &CandidateFile<P>) -> Result<(), RejectionReason> {
    if !is_spreadsheet(config, file) {
        log::debug!("Rejected {} ({}): invalid type", file.name, file.media_type);
        return Err(RejectionReason::InvalidType);
    }

    if file.size > config.max_file_size_bytes {
        log::debug!(
            "Rejected {}: {} bytes exceeds {}",
            file.name,
            file.size,
            config.max_file_size_bytes
        );
        return Err(RejectionReason::TooLarge);
    }

    Ok(())
}

fn is_spreadsheet<P>(config: &UploaderConfig, file: &CandidateFile<P>) -> bool {
    if config.allowed_media_types.contains(&file.media_type) {
        return true;
    }

    let extension = config.spreadsheet_extension.to_ascii_lowercase();
    !extension.is_empty() && file.name.to_ascii_lowercase().ends_with(&extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{XLSM_MEDIA_TYPE, XLSX_MEDIA_TYPE};

    fn file(name: &str, media_type: &str, size: u64) -> CandidateFile<()> {
        CandidateFile::new(name, media_type, size, ())
    }

    #[test]
    fn test_rejects_disallowed_type_and_extension() {
        let config = UploaderConfig::default();
        for (name, media_type) in [
            ("report.pdf", "application/pdf"),
            ("data.csv", "text/csv"),
            ("legacy.xls", "application/vnd.ms-excel"),
            ("noext", ""),
            ("archive.xlsx.zip", "application/zip"),
        ] {
            assert_eq!(
                validate(&config, &file(name, media_type, 100)),
                Err(RejectionReason::InvalidType),
                "{} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_accepts_allowed_media_types() {
        let config = UploaderConfig::default();
        assert!(validate(&config, &file("a.bin", XLSX_MEDIA_TYPE, 100)).is_ok());
        assert!(validate(&config, &file("b.xlsm", XLSM_MEDIA_TYPE, 100)).is_ok());
    }

    #[test]
    fn test_extension_fallback_for_misreported_type() {
        let config = UploaderConfig::default();
        assert!(validate(&config, &file("edital.xlsx", "", 100)).is_ok());
        assert!(validate(&config, &file("EDITAL.XLSX", "application/octet-stream", 100)).is_ok());
    }

    #[test]
    fn test_too_large_even_when_type_allowed() {
        let config = UploaderConfig::default();
        let limit = config.max_file_size_bytes;
        assert_eq!(
            validate(&config, &file("big.xlsx", XLSX_MEDIA_TYPE, limit + 1)),
            Err(RejectionReason::TooLarge)
        );
        assert!(validate(&config, &file("edge.xlsx", XLSX_MEDIA_TYPE, limit)).is_ok());
    }

    #[test]
    fn test_type_checked_before_size() {
        let config = UploaderConfig::default();
        let huge = config.max_file_size_bytes * 2;
        assert_eq!(
            validate(&config, &file("movie.mp4", "video/mp4", huge)),
            Err(RejectionReason::InvalidType)
        );
    }

    #[test]
    fn test_respects_configured_limit() {
        let config = UploaderConfig::default().with_max_file_size(1024);
        assert_eq!(
            validate(&config, &file("a.xlsx", XLSX_MEDIA_TYPE, 2048)),
            Err(RejectionReason::TooLarge)
        );
    }
}
