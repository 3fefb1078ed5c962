//! Candidate files picked for the knowledge base.
//!
//! A [`CandidateFile`] only records metadata plus a path. The bytes stay on
//! disk until the upload request is built by the API client.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A file the user selected but has not submitted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Display name (file name component, no directories)
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Declared MIME type, derived from the extension
    pub mime_type: String,
    /// Where the content lives
    pub path: PathBuf,
}

impl CandidateFile {
    pub fn new(
        name: impl Into<String>,
        size: u64,
        mime_type: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
            path: path.into(),
        }
    }

    /// Stat a path on disk and build a candidate from it.
    ///
    /// Directories and missing files are rejected here; type and size
    /// policy is left to the validator.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::file_not_found(path),
            _ => Error::Io(e),
        })?;

        if !metadata.is_file() {
            return Err(Error::validation(format!(
                "{} is not a regular file",
                path.display()
            )));
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_string();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        Ok(Self {
            mime_type: mime_for_extension(extension.as_deref()).to_string(),
            name,
            size: metadata.len(),
            path: path.to_path_buf(),
        })
    }
}

/// Guess a MIME type from a lowercase extension (without the dot).
///
/// Unknown extensions map to `application/octet-stream`.
pub fn mime_for_extension(extension: Option<&str>) -> &'static str {
    match extension {
        // Documents
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("rtf") => "application/rtf",
        Some("odt") => "application/vnd.oasis.opendocument.text",

        // Text
        Some("txt") => "text/plain",
        Some("md") | Some("markdown") => "text/markdown",
        Some("html") | Some("htm") => "text/html",
        Some("csv") => "text/csv",
        Some("json") => "application/json",
        Some("xml") => "application/xml",

        // Images
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",

        Some("zip") => "application/zip",

        _ => "application/octet-stream",
    }
}

/// Human-readable byte size in base-1024 units.
///
/// Two decimals at most, trailing zeros trimmed: `10 MB`, `1.5 KB`, `0 Bytes`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}
