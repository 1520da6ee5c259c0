//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Intake Types** - the browser flavour of the candidate file
//! - **Toast Types** - transient notifications
//! - **Submission Types** - the page-wide single-flight latch
//! - **Result Types** - the hand-off from submission to the result view

use edital_core::{CandidateFile, FlightGuard, Notice, SingleFlight, SubmissionResult};
use leptos::*;

use crate::config::{MAX_TOASTS, TOAST_DURATION_MS};

// =============================================================================
// Intake Types
// =============================================================================

/// A candidate file backed by the browser's `File` handle.
pub type SelectedFile = CandidateFile<web_sys::File>;

/// Copy the metadata out of a browser file.
pub fn candidate_from_file(file: web_sys::File) -> SelectedFile {
    let size = file.size().max(0.0) as u64;
    CandidateFile::new(file.name(), file.type_(), size, file)
}

// =============================================================================
// Toast Types
// =============================================================================

/// A notice currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub notice: Notice,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

/// Toast queue shared through context.
#[derive(Clone, Copy)]
pub struct Toasts {
    entries: RwSignal<Vec<ToastEntry>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            entries: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn entries(&self) -> Signal<Vec<ToastEntry>> {
        self.entries.into()
    }

    /// Show `notice` and schedule its removal.
    pub fn push(&self, notice: Notice) {
        if notice.is_error() {
            log::warn!("{} {}: {}", notice.severity.emoji(), notice.title, notice.description);
        } else {
            log::info!("{} {}: {}", notice.severity.emoji(), notice.title, notice.description);
        }

        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let entry = ToastEntry {
            id,
            notice,
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        };
        self.entries.update(|entries| push_capped(entries, entry, MAX_TOASTS));

        let entries = self.entries;
        gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || {
            entries.update(|entries| entries.retain(|e| e.id != id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.entries.update(|entries| entries.retain(|e| e.id != id));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

/// Append `entry`, dropping the oldest ones beyond `max`.
fn push_capped(entries: &mut Vec<ToastEntry>, entry: ToastEntry, max: usize) {
    entries.push(entry);
    if entries.len() > max {
        let excess = entries.len() - max;
        entries.drain(..excess);
    }
}

// =============================================================================
// Submission Types
// =============================================================================

/// One latch per intake page, shared by every panel that can submit.
///
/// Outlives the submit panel so removing and re-selecting a file while a
/// request is out cannot start a second one.
#[derive(Clone, Copy)]
pub struct SubmissionLatch {
    flight: StoredValue<SingleFlight>,
    busy: RwSignal<bool>,
}

/// Held by the running submission; clears the busy flag on drop.
pub struct SubmissionTicket {
    _guard: FlightGuard,
    busy: RwSignal<bool>,
}

impl SubmissionLatch {
    pub fn new() -> Self {
        Self {
            flight: store_value(SingleFlight::new()),
            busy: create_rw_signal(false),
        }
    }

    /// Claim the latch, or `None` while another submission is running.
    pub fn try_begin(&self) -> Option<SubmissionTicket> {
        let guard = self.flight.with_value(SingleFlight::try_begin)?;
        self.busy.set(true);
        Some(SubmissionTicket {
            _guard: guard,
            busy: self.busy,
        })
    }

    pub fn is_busy(&self) -> Signal<bool> {
        self.busy.into()
    }
}

impl Default for SubmissionLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SubmissionTicket {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

/// Hold `file` as the page's selection, discarding any earlier result.
pub fn hold_new_file<P: 'static>(
    results: ResultStore,
    set_selected: WriteSignal<Option<CandidateFile<P>>>,
    file: CandidateFile<P>,
) {
    results.clear();
    set_selected.set(Some(file));
}

// =============================================================================
// Result Types
// =============================================================================

/// Carries the submission result from the intake page to the result page.
#[derive(Clone, Copy)]
pub struct ResultStore(RwSignal<Option<SubmissionResult>>);

impl ResultStore {
    pub fn new() -> Self {
        Self(create_rw_signal(None))
    }

    pub fn set(&self, result: SubmissionResult) {
        self.0.set(Some(result));
    }

    pub fn clear(&self) {
        self.0.set(None);
    }

    pub fn get(&self) -> Option<SubmissionResult> {
        self.0.get()
    }

    pub fn get_untracked(&self) -> Option<SubmissionResult> {
        self.0.get_untracked()
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}
