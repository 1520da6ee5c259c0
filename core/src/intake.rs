//! Single-file upload intake.
//!
//! Drag & drop and the file picker both end up in [`UploadIntake::accept_first`];
//! the intake validates, keeps at most one file and tells an optional
//! observer when a new file is accepted.

use crate::config::UploaderConfig;
use crate::error::{ValidationRejected, ValidationResult};
use crate::file::CandidateFile;
use crate::validator::validate;

/// What the intake currently holds.
#[derive(Clone, Debug, PartialEq)]
pub enum IntakeState<P = Vec<u8>> {
    Empty,
    Holding(CandidateFile<P>),
}

impl<P> Default for IntakeState<P> {
    fn default() -> Self {
        IntakeState::Empty
    }
}

impl<P> IntakeState<P> {
    pub fn file(&self) -> Option<&CandidateFile<P>> {
        match self {
            IntakeState::Empty => None,
            IntakeState::Holding(file) => Some(file),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, IntakeState::Empty)
    }
}

type AcceptObserver<P> = Box<dyn FnMut(&CandidateFile<P>)>;

/// Holds the currently accepted file.
pub struct UploadIntake<P = Vec<u8>> {
    config: UploaderConfig,
    state: IntakeState<P>,
    on_accept: Option<AcceptObserver<P>>,
}

impl<P> UploadIntake<P> {
    pub fn new(config: UploaderConfig) -> Self {
        Self {
            config,
            state: IntakeState::Empty,
            on_accept: None,
        }
    }

    /// Register the "file accepted" observer, replacing any previous one.
    pub fn on_accept(mut self, observer: impl FnMut(&CandidateFile<P>) + 'static) -> Self {
        self.on_accept = Some(Box::new(observer));
        self
    }

    pub fn state(&self) -> &IntakeState<P> {
        &self.state
    }

    pub fn held(&self) -> Option<&CandidateFile<P>> {
        self.state.file()
    }

    /// Validate `file` and, if it passes, hold it in place of the current one.
    ///
    /// A rejected file leaves the state untouched.
    pub fn accept(&mut self, file: CandidateFile<P>) -> ValidationResult<&CandidateFile<P>> {
        if let Err(reason) = validate(&self.config, &file) {
            return Err(ValidationRejected {
                file_name: file.name,
                reason,
            });
        }

        log::info!("📄 Accepted {} ({})", file.name, file.size_label());
        self.state = IntakeState::Holding(file);

        let IntakeState::Holding(held) = &self.state else {
            unreachable!("state was just set to Holding");
        };
        if let Some(observer) = self.on_accept.as_mut() {
            observer(held);
        }
        Ok(held)
    }

    /// Entry point for input surfaces that may deliver several files.
    ///
    /// Only the first file is considered; an empty selection is ignored and
    /// returns `Ok(None)`.
    pub fn accept_first<I>(&mut self, files: I) -> ValidationResult<Option<&CandidateFile<P>>>
    where
        I: IntoIterator<Item = CandidateFile<P>>,
    {
        match files.into_iter().next() {
            Some(file) => self.accept(file).map(Some),
            None => Ok(None),
        }
    }

    /// Drop the held file, if any.
    pub fn remove(&mut self) -> Option<CandidateFile<P>> {
        match std::mem::take(&mut self.state) {
            IntakeState::Holding(file) => {
                log::info!("🗑️  Removed {}", file.name);
                Some(file)
            }
            IntakeState::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::XLSX_MEDIA_TYPE;
    use crate::error::RejectionReason;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn xlsx(name: &str) -> CandidateFile<()> {
        CandidateFile::new(name, XLSX_MEDIA_TYPE, 1024, ())
    }

    #[test]
    fn test_accept_valid_file_notifies_observer() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_by_observer = seen.clone();
        let mut intake = UploadIntake::new(UploaderConfig::default())
            .on_accept(move |file: &CandidateFile<()>| seen_by_observer.borrow_mut().push(file.name.clone()));

        let held = intake.accept(xlsx("edital.xlsx")).unwrap();
        assert_eq!(held.name, "edital.xlsx");
        assert_eq!(*seen.borrow(), vec!["edital.xlsx".to_string()]);
    }

    #[test]
    fn test_new_file_replaces_previous() {
        let mut intake = UploadIntake::new(UploaderConfig::default());
        intake.accept(xlsx("first.xlsx")).unwrap();
        intake.accept(xlsx("second.xlsx")).unwrap();

        assert_eq!(intake.held().map(|f| f.name.as_str()), Some("second.xlsx"));
    }

    #[test]
    fn test_rejected_file_keeps_current_state() {
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let mut intake = UploadIntake::new(UploaderConfig::default())
            .on_accept(move |_: &CandidateFile<()>| *counter.borrow_mut() += 1);

        let err = intake
            .accept(CandidateFile::new("photo.png", "image/png", 10, ()))
            .unwrap_err();
        assert_eq!(err.reason, RejectionReason::InvalidType);
        assert!(intake.state().is_empty());

        intake.accept(xlsx("kept.xlsx")).unwrap();
        let too_big = CandidateFile::new("huge.xlsx", XLSX_MEDIA_TYPE, u64::MAX, ());
        let err = intake.accept(too_big).unwrap_err();
        assert_eq!(err.reason, RejectionReason::TooLarge);
        assert_eq!(err.file_name, "huge.xlsx");
        assert_eq!(intake.held().map(|f| f.name.as_str()), Some("kept.xlsx"));
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_accept_first_takes_only_first_file() {
        let mut intake = UploadIntake::new(UploaderConfig::default());
        let dropped = vec![xlsx("one.xlsx"), xlsx("two.xlsx"), xlsx("three.xlsx")];

        let held = intake.accept_first(dropped).unwrap().unwrap();
        assert_eq!(held.name, "one.xlsx");
    }

    #[test]
    fn test_accept_first_with_invalid_first_file_ignores_the_rest() {
        let mut intake = UploadIntake::new(UploaderConfig::default());
        let dropped = vec![CandidateFile::new("a.txt", "text/plain", 1, ()), xlsx("b.xlsx")];

        assert!(intake.accept_first(dropped).is_err());
        assert!(intake.state().is_empty());
    }

    #[test]
    fn test_accept_first_empty_selection() {
        let mut intake: UploadIntake<()> = UploadIntake::new(UploaderConfig::default());
        assert_eq!(intake.accept_first(Vec::new()).unwrap(), None);
        assert!(intake.state().is_empty());
    }

    #[test]
    fn test_remove() {
        let mut intake = UploadIntake::new(UploaderConfig::default());
        assert!(intake.remove().is_none());

        intake.accept(xlsx("edital.xlsx")).unwrap();
        let removed = intake.remove().unwrap();
        assert_eq!(removed.name, "edital.xlsx");
        assert_eq!(*intake.state(), IntakeState::Empty);
    }
}
