//! Candidate file model.

use std::fmt;

/// A file chosen by the user, before or after acceptance.
///
/// `P` is the payload handle: a `web_sys::File` in the browser, the raw
/// bytes on native targets. The metadata is copied out once so that the
/// validator never touches the payload.
#[derive(Clone, PartialEq)]
pub struct CandidateFile<P = Vec<u8>> {
    /// Original filename.
    pub name: String,
    /// Media type declared by the browser or inferred from the extension.
    pub media_type: String,
    /// Size in bytes.
    pub size: u64,
    /// File contents (or a handle to them).
    pub payload: P,
}

impl<P> CandidateFile<P> {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, size: u64, payload: P) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size,
            payload,
        }
    }

    /// Size formatted in megabytes with two decimals, e.g. `4.77 MB`.
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size as f64 / 1024.0 / 1024.0)
    }
}

impl CandidateFile<Vec<u8>> {
    /// Build a file from in-memory bytes; the size is taken from the buffer.
    pub fn from_bytes(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let size = bytes.len() as u64;
        Self::new(name, media_type, size, bytes)
    }
}

impl<P> fmt::Debug for CandidateFile<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidateFile")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_sets_size() {
        let file = CandidateFile::from_bytes("a.xlsx", "", vec![0u8; 2048]);
        assert_eq!(file.size, 2048);
        assert_eq!(file.size_label(), "0.00 MB");
    }

    #[test]
    fn test_size_label() {
        let file = CandidateFile::new("a.xlsx", "", 5 * 1024 * 1024, ());
        assert_eq!(file.size_label(), "5.00 MB");
    }
}
