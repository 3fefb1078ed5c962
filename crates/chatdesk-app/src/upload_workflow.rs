//! Upload modal state machine.
//!
//! Status is an explicit enum derived by [`next_status`] from the loading
//! flag and the simulated progress. Everything time-related is passed in
//! as an [`Instant`] so the auto-close dwell is driven by `Tick` messages
//! rather than a timer of its own.

use std::time::{Duration, Instant};

use chatdesk_core::{FileValidator, UploadMode};
use tracing::trace;

use crate::progress::{ProgressSimulator, COMPLETE};
use crate::text_upload::TextUploadForm;
use crate::upload_queue::UploadQueue;

/// How long the success view stays up before the modal closes itself
pub const DEFAULT_SUCCESS_DWELL_MS: u64 = 1200;

/// Identifies one submission so stale ticks and results can be discarded
pub type UploadId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStatus {
    /// Mode picker and inputs visible
    #[default]
    Idle,
    /// Progress view, inputs disabled
    Uploading,
    /// Confirmation view, inputs disabled
    Success,
}

/// Pure transition of the modal status.
///
/// - loading with progress above 0 is `Uploading`
/// - not loading with progress at 100 is `Success`
/// - anything else is `Idle` (also covers reset and failure)
pub fn next_status(previous: UploadStatus, loading: bool, progress: f64) -> UploadStatus {
    let next = if loading && progress > 0.0 {
        UploadStatus::Uploading
    } else if !loading && progress >= COMPLETE {
        UploadStatus::Success
    } else {
        UploadStatus::Idle
    };

    if next != previous {
        trace!("Upload status {:?} -> {:?}", previous, next);
    }
    next
}

/// Everything the upload modal owns while it is open.
#[derive(Debug, Clone)]
pub struct UploadModalState {
    pub mode: UploadMode,
    pub queue: UploadQueue,
    pub text_form: TextUploadForm,
    /// Path being typed in file mode
    pub path_input: String,
    /// Highlighted row of the queued file list
    pub selected_file: usize,
    progress: ProgressSimulator,
    status: UploadStatus,
    loading: bool,
    active_upload: Option<UploadId>,
    success_since: Option<Instant>,
    dwell: Duration,
}

impl Default for UploadModalState {
    fn default() -> Self {
        Self::new(false, Duration::from_millis(DEFAULT_SUCCESS_DWELL_MS))
    }
}

impl UploadModalState {
    pub fn new(multiple: bool, dwell: Duration) -> Self {
        Self {
            mode: UploadMode::File,
            queue: UploadQueue::new(multiple),
            text_form: TextUploadForm::new(),
            path_input: String::new(),
            selected_file: 0,
            progress: ProgressSimulator::new(),
            status: UploadStatus::Idle,
            loading: false,
            active_upload: None,
            success_since: None,
            dwell,
        }
    }

    pub fn status(&self) -> UploadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn progress(&self) -> &ProgressSimulator {
        &self.progress
    }

    pub fn active_upload(&self) -> Option<UploadId> {
        self.active_upload
    }

    /// Inputs accept edits only while idle and nothing is in flight
    pub fn accepts_input(&self) -> bool {
        self.status == UploadStatus::Idle && !self.loading
    }

    /// Switch between file and text mode. Refused unless idle.
    pub fn set_mode(&mut self, mode: UploadMode) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.mode = mode;
        true
    }

    pub fn toggle_mode(&mut self) -> bool {
        self.set_mode(self.mode.toggled())
    }

    /// Closing is refused while a request is in flight
    pub fn can_close(&self) -> bool {
        self.status != UploadStatus::Uploading && !self.loading
    }

    /// Fresh modal: progress at 0, no leftover inputs. Mode is kept.
    pub fn open(&mut self) {
        self.reset();
    }

    /// Close if allowed. Returns whether the modal closed.
    pub fn close(&mut self) -> bool {
        if !self.can_close() {
            return false;
        }
        self.reset();
        true
    }

    fn reset(&mut self) {
        self.progress.reset();
        self.loading = false;
        self.active_upload = None;
        self.success_since = None;
        self.queue.clear();
        self.text_form.clear();
        self.path_input.clear();
        self.selected_file = 0;
        self.refresh_status();
    }

    /// Mark a submission as started
    pub fn begin_upload(&mut self, upload_id: UploadId) {
        self.loading = true;
        self.active_upload = Some(upload_id);
        self.success_since = None;
        self.progress.start();
        self.refresh_status();
    }

    /// Apply a progress tick for `upload_id`. Ticks for other or finished
    /// submissions are ignored.
    pub fn apply_tick(&mut self, upload_id: UploadId, increment: f64) -> bool {
        if !self.is_current(upload_id) {
            return false;
        }
        let applied = self.progress.tick(increment);
        self.refresh_status();
        applied
    }

    /// The request resolved successfully at `now`
    pub fn finish_success(&mut self, upload_id: UploadId, now: Instant) -> bool {
        if !self.is_current(upload_id) {
            return false;
        }
        self.loading = false;
        self.active_upload = None;
        self.progress.complete();
        self.refresh_status();
        if self.status == UploadStatus::Success {
            self.success_since = Some(now);
        }
        true
    }

    /// The request failed
    pub fn finish_failure(&mut self, upload_id: UploadId) -> bool {
        if !self.is_current(upload_id) {
            return false;
        }
        self.loading = false;
        self.active_upload = None;
        self.progress.fail();
        self.refresh_status();
        true
    }

    /// Returns `true` exactly once when the success dwell has elapsed; the
    /// caller then closes the modal.
    pub fn poll_auto_close(&mut self, now: Instant) -> bool {
        match self.success_since {
            Some(since)
                if self.status == UploadStatus::Success
                    && now.saturating_duration_since(since) >= self.dwell =>
            {
                self.success_since = None;
                self.status = UploadStatus::Idle;
                true
            }
            _ => false,
        }
    }

    /// Move the file-list highlight
    pub fn select_next_file(&mut self) {
        let len = self.queue.len();
        if len > 0 {
            self.selected_file = (self.selected_file + 1) % len;
        }
    }

    pub fn select_previous_file(&mut self) {
        let len = self.queue.len();
        if len > 0 {
            self.selected_file = if self.selected_file == 0 {
                len - 1
            } else {
                self.selected_file - 1
            };
        }
    }

    pub fn remove_selected_file(&mut self) {
        if self.queue.remove(self.selected_file).is_some() {
            self.clamp_selection();
        }
    }

    /// Validate and queue the paths in one batch
    pub fn add_paths(&mut self, paths: &[std::path::PathBuf], validator: &FileValidator) {
        self.queue.add_paths(paths, validator);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.queue.len();
        if len == 0 {
            self.selected_file = 0;
        } else if self.selected_file >= len {
            self.selected_file = len - 1;
        }
    }

    fn is_current(&self, upload_id: UploadId) -> bool {
        self.loading && self.active_upload == Some(upload_id)
    }

    fn refresh_status(&mut self) {
        self.status = next_status(self.status, self.loading, self.progress.value());
    }
}
