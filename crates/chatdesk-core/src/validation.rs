//! File validation against the knowledge base upload policy.
//!
//! Two checks run in order (size, then type); the first failure produces the
//! single rejection message for the file.

use crate::files::{format_file_size, CandidateFile};

/// Default maximum upload size (10 MiB)
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Default accepted types
pub const DEFAULT_ACCEPT: &str = ".txt,.pdf,.doc,.docx,.md";

/// Upload policy: maximum size plus the accepted type patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileValidator {
    max_size_bytes: u64,
    /// Raw accept string, shown verbatim in messages
    accept: String,
    /// `.ext` patterns, lowercased
    extensions: Vec<String>,
    /// Non-extension patterns matched as MIME substrings
    mime_patterns: Vec<String>,
}

impl Default for FileValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SIZE_BYTES, DEFAULT_ACCEPT)
    }
}

impl FileValidator {
    /// Build a validator from a size limit and a comma-separated accept list
    /// (e.g. `".txt,.pdf,text/"`).
    pub fn new(max_size_bytes: u64, accept: impl Into<String>) -> Self {
        let accept = accept.into();
        let mut extensions = Vec::new();
        let mut mime_patterns = Vec::new();

        for pattern in accept.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            if pattern.starts_with('.') {
                extensions.push(pattern.to_lowercase());
            } else {
                mime_patterns.push(pattern.to_string());
            }
        }

        Self {
            max_size_bytes,
            accept,
            extensions,
            mime_patterns,
        }
    }

    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }

    pub fn accept(&self) -> &str {
        &self.accept
    }

    /// Validate a file. `Err` carries the human-readable rejection reason.
    pub fn validate(&self, file: &CandidateFile) -> Result<(), String> {
        if file.size > self.max_size_bytes {
            return Err(format!(
                "File \"{}\" is too large. Maximum size is {}.",
                file.name,
                format_file_size(self.max_size_bytes)
            ));
        }

        if !self.accept.trim().is_empty() && !self.is_accepted_type(file) {
            return Err(format!(
                "File \"{}\" has an invalid type. Allowed types: {}",
                file.name, self.accept
            ));
        }

        Ok(())
    }

    fn is_accepted_type(&self, file: &CandidateFile) -> bool {
        let extension = file_extension(&file.name);
        self.extensions.iter().any(|ext| *ext == extension)
            || self
                .mime_patterns
                .iter()
                .any(|pattern| file.mime_type.contains(pattern.as_str()))
    }
}

/// `"." + text after the last dot`, lowercased. A name without a dot yields
/// `"." + name`.
fn file_extension(name: &str) -> String {
    let last = name.rsplit('.').next().unwrap_or(name);
    format!(".{}", last.to_lowercase())
}
