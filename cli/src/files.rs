//! Loading candidate files from disk.

use edital_core::{CandidateFile, XLSM_MEDIA_TYPE, XLSX_MEDIA_TYPE};
use std::path::Path;

use crate::error::CliResult;

/// Media type a browser would declare for `path`, guessed from its extension.
pub fn media_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("xlsx") => XLSX_MEDIA_TYPE,
        Some("xlsm") => XLSM_MEDIA_TYPE,
        Some("xls") => "application/vnd.ms-excel",
        Some("csv") => "text/csv",
        _ => "application/octet-stream",
    }
}

/// Read `path` into a candidate file named after its last component.
pub async fn load_candidate(path: &Path) -> CliResult<CandidateFile> {
    let bytes = tokio::fs::read(path).await?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    log::debug!("Loaded {} ({} bytes)", name, bytes.len());
    Ok(CandidateFile::from_bytes(name, media_type_for(path), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_for() {
        assert_eq!(media_type_for(Path::new("edital.xlsx")), XLSX_MEDIA_TYPE);
        assert_eq!(media_type_for(Path::new("EDITAL.XLSM")), XLSM_MEDIA_TYPE);
        assert_eq!(media_type_for(Path::new("dados.csv")), "text/csv");
        assert_eq!(media_type_for(Path::new("README")), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_load_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Edital 2024.xlsx");
        std::fs::write(&path, vec![7u8; 1234]).unwrap();

        let file = load_candidate(&path).await.unwrap();
        assert_eq!(file.name, "Edital 2024.xlsx");
        assert_eq!(file.media_type, XLSX_MEDIA_TYPE);
        assert_eq!(file.size, 1234);
        assert_eq!(file.payload.len(), 1234);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_candidate(&dir.path().join("missing.xlsx")).await.unwrap_err();
        assert!(matches!(err, crate::CliError::Io(_)));
    }
}
