//! Files picked for upload but not yet submitted.

use std::path::PathBuf;

use chatdesk_core::{CandidateFile, FileValidator};

/// Selection plus the error list of the most recent batch.
#[derive(Debug, Clone, Default)]
pub struct UploadQueue {
    files: Vec<CandidateFile>,
    errors: Vec<String>,
    multiple: bool,
}

/// How one batch was partitioned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchOutcome {
    pub accepted: usize,
    pub rejected: usize,
}

impl UploadQueue {
    pub fn new(multiple: bool) -> Self {
        Self {
            multiple,
            ..Default::default()
        }
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    pub fn set_multiple(&mut self, multiple: bool) {
        self.multiple = multiple;
    }

    /// Validate a batch and merge the accepted files into the selection.
    ///
    /// The error list is replaced by this batch's rejections. Single-select
    /// keeps only the first accepted file; multi-select appends. A batch
    /// with nothing accepted leaves the selection as it was.
    pub fn add_batch(&mut self, files: Vec<CandidateFile>, validator: &FileValidator) -> BatchOutcome {
        self.apply_batch(files.into_iter().map(Ok).collect(), validator)
    }

    /// Like [`add_batch`](Self::add_batch) for paths on disk. Paths that
    /// cannot be read count as rejections.
    pub fn add_paths(&mut self, paths: &[PathBuf], validator: &FileValidator) -> BatchOutcome {
        let entries = paths
            .iter()
            .map(|path| {
                CandidateFile::from_path(path).map_err(|e| {
                    format!("Cannot read \"{}\": {}", path.display(), e.user_message())
                })
            })
            .collect();
        self.apply_batch(entries, validator)
    }

    fn apply_batch(
        &mut self,
        entries: Vec<Result<CandidateFile, String>>,
        validator: &FileValidator,
    ) -> BatchOutcome {
        let mut accepted = Vec::new();
        let mut errors = Vec::new();

        for entry in entries {
            match entry.and_then(|file| validator.validate(&file).map(|()| file)) {
                Ok(file) => accepted.push(file),
                Err(message) => errors.push(message),
            }
        }

        let outcome = BatchOutcome {
            accepted: accepted.len(),
            rejected: errors.len(),
        };

        self.errors = errors;

        if !accepted.is_empty() {
            if self.multiple {
                self.files.extend(accepted);
            } else {
                accepted.truncate(1);
                self.files = accepted;
            }
        }

        outcome
    }

    /// Remove by position. Out of range is a no-op; errors are untouched.
    pub fn remove(&mut self, index: usize) -> Option<CandidateFile> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    /// Hand every queued file to `upload` in selection order, then clear
    /// the selection and the errors. Does nothing on an empty queue.
    pub fn submit<F: FnMut(CandidateFile)>(&mut self, mut upload: F) -> usize {
        if self.files.is_empty() {
            return 0;
        }
        let count = self.files.len();
        for file in self.files.drain(..) {
            upload(file);
        }
        self.errors.clear();
        count
    }

    pub fn clear(&mut self) {
        self.files.clear();
        self.errors.clear();
    }

    pub fn files(&self) -> &[CandidateFile] {
        &self.files
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Combined size of the selection in bytes
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatdesk_core::{DEFAULT_ACCEPT, DEFAULT_MAX_SIZE_BYTES};
    use tempfile::tempdir;

    fn validator() -> FileValidator {
        FileValidator::new(DEFAULT_MAX_SIZE_BYTES, DEFAULT_ACCEPT)
    }

    fn file(name: &str, size: u64) -> CandidateFile {
        let mime = match name.rsplit_once('.').map(|(_, ext)| ext) {
            Some("pdf") => "application/pdf",
            Some("md") => "text/markdown",
            Some("png") => "image/png",
            _ => "text/plain",
        };
        CandidateFile::new(name, size, mime, format!("/tmp/{}", name))
    }

    fn names(queue: &UploadQueue) -> Vec<&str> {
        queue.files().iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_single_select_keeps_first_of_latest_batch() {
        let mut queue = UploadQueue::new(false);
        queue.add_batch(vec![file("a.txt", 1), file("b.txt", 1)], &validator());
        queue.add_batch(vec![file("c.pdf", 1), file("d.md", 1)], &validator());
        assert_eq!(names(&queue), vec!["c.pdf"]);
    }

    #[test]
    fn test_multi_select_appends_in_order() {
        let mut queue = UploadQueue::new(true);
        queue.add_batch(vec![file("a.txt", 1), file("b.txt", 1)], &validator());
        queue.add_batch(vec![file("c.pdf", 1)], &validator());
        assert_eq!(names(&queue), vec!["a.txt", "b.txt", "c.pdf"]);
    }

    #[test]
    fn test_multi_select_keeps_duplicate_names() {
        let mut queue = UploadQueue::new(true);
        queue.add_batch(vec![file("a.txt", 1)], &validator());
        queue.add_batch(vec![file("a.txt", 2)], &validator());
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_errors_are_replaced_per_batch() {
        let mut queue = UploadQueue::new(true);
        let outcome = queue.add_batch(
            vec![file("big.pdf", DEFAULT_MAX_SIZE_BYTES + 1), file("ok.txt", 1)],
            &validator(),
        );
        assert_eq!(
            outcome,
            BatchOutcome {
                accepted: 1,
                rejected: 1
            }
        );
        assert_eq!(queue.errors().len(), 1);
        assert!(queue.errors()[0].contains("big.pdf"));

        queue.add_batch(vec![file("photo.png", 1)], &validator());
        assert_eq!(queue.errors().len(), 1);
        assert!(queue.errors()[0].contains("photo.png"));

        queue.add_batch(vec![file("notes.md", 1)], &validator());
        assert!(queue.errors().is_empty());
    }

    #[test]
    fn test_all_rejected_batch_leaves_selection() {
        let mut queue = UploadQueue::new(false);
        queue.add_batch(vec![file("keep.txt", 1)], &validator());
        let outcome = queue.add_batch(vec![file("photo.png", 1)], &validator());
        assert_eq!(outcome.accepted, 0);
        assert_eq!(names(&queue), vec!["keep.txt"]);
    }

    #[test]
    fn test_remove_by_position_keeps_errors() {
        let mut queue = UploadQueue::new(true);
        queue.add_batch(
            vec![file("a.txt", 1), file("b.txt", 1), file("x.png", 1)],
            &validator(),
        );
        let removed = queue.remove(0);
        assert_eq!(removed.map(|f| f.name), Some("a.txt".to_string()));
        assert_eq!(names(&queue), vec!["b.txt"]);
        assert_eq!(queue.errors().len(), 1);

        assert!(queue.remove(5).is_none());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_submit_invokes_once_per_file_in_order() {
        let mut queue = UploadQueue::new(true);
        queue.add_batch(
            vec![file("a.txt", 1), file("b.pdf", 1), file("x.png", 1)],
            &validator(),
        );

        let mut seen = Vec::new();
        let count = queue.submit(|f| seen.push(f.name));

        assert_eq!(count, 2);
        assert_eq!(seen, vec!["a.txt", "b.pdf"]);
        assert!(queue.is_empty());
        assert!(queue.errors().is_empty());
    }

    #[test]
    fn test_submit_on_empty_queue_is_noop() {
        let mut queue = UploadQueue::new(false);
        queue.add_batch(vec![file("x.png", 1)], &validator());

        let mut calls = 0;
        let count = queue.submit(|_| calls += 1);

        assert_eq!(count, 0);
        assert_eq!(calls, 0);
        // Errors survive a no-op submit
        assert_eq!(queue.errors().len(), 1);
    }

    #[test]
    fn test_add_paths_reports_unreadable_paths() {
        let dir = tempdir().unwrap();
        let present = dir.path().join("guide.md");
        std::fs::write(&present, "# Guide").unwrap();
        let missing = dir.path().join("missing.pdf");

        let mut queue = UploadQueue::new(true);
        let outcome = queue.add_paths(&[present, missing], &validator());

        assert_eq!(outcome.accepted, 1);
        assert_eq!(outcome.rejected, 1);
        assert_eq!(names(&queue), vec!["guide.md"]);
        assert!(queue.errors()[0].contains("missing.pdf"));
    }

    #[test]
    fn test_total_size() {
        let mut queue = UploadQueue::new(true);
        queue.add_batch(vec![file("a.txt", 100), file("b.txt", 24)], &validator());
        assert_eq!(queue.total_size(), 124);
    }
}
