//! Raw text form of the upload modal.

/// Minimum trimmed content length accepted by the backend
pub const MIN_CONTENT_CHARS: usize = 10;

/// Extension appended to filenames that have none
pub const DEFAULT_TEXT_EXTENSION: &str = ".txt";

/// Which input has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextField {
    #[default]
    Filename,
    Content,
}

impl TextField {
    pub fn toggled(self) -> Self {
        match self {
            TextField::Filename => TextField::Content,
            TextField::Content => TextField::Filename,
        }
    }
}

/// Give a filename without any extension the `.txt` extension.
///
/// The name is trimmed first; a name that already contains a dot is kept.
pub fn normalize_text_filename(filename: &str) -> String {
    let trimmed = filename.trim();
    if trimmed.contains('.') {
        trimmed.to_string()
    } else {
        format!("{}{}", trimmed, DEFAULT_TEXT_EXTENSION)
    }
}

/// A validated submission: trimmed content and normalized filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSubmission {
    pub content: String,
    pub filename: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextUploadForm {
    pub filename: String,
    pub content: String,
    pub focus: TextField,
    pub filename_error: Option<String>,
    pub content_error: Option<String>,
}

impl TextUploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn switch_focus(&mut self) {
        self.focus = self.focus.toggled();
    }

    /// Type a character into the focused field
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            TextField::Filename => {
                if c != '\n' && c != '\r' {
                    self.filename.push(c);
                    self.filename_error = None;
                }
            }
            TextField::Content => {
                self.content.push(c);
                self.content_error = None;
            }
        }
    }

    /// Paste text into the focused field; filenames stay single-line
    pub fn insert_str(&mut self, text: &str) {
        match self.focus {
            TextField::Filename => {
                let line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
                if !line.is_empty() {
                    self.filename.push_str(&line);
                    self.filename_error = None;
                }
            }
            TextField::Content => {
                if !text.is_empty() {
                    self.content.push_str(&text.replace("\r\n", "\n"));
                    self.content_error = None;
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            TextField::Filename => {
                self.filename.pop();
                self.filename_error = None;
            }
            TextField::Content => {
                self.content.pop();
                self.content_error = None;
            }
        }
    }

    /// Clear the focused field
    pub fn clear_field(&mut self) {
        match self.focus {
            TextField::Filename => {
                self.filename.clear();
                self.filename_error = None;
            }
            TextField::Content => {
                self.content.clear();
                self.content_error = None;
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn has_errors(&self) -> bool {
        self.filename_error.is_some() || self.content_error.is_some()
    }

    /// Both fields have something in them
    pub fn can_submit(&self) -> bool {
        !self.filename.trim().is_empty() && !self.content.trim().is_empty()
    }

    /// Whitespace-separated words of the trimmed content
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Populate the per-field errors. Returns `true` when both fields pass.
    pub fn validate(&mut self) -> bool {
        self.filename_error = if self.filename.trim().is_empty() {
            Some("Filename is required".to_string())
        } else {
            None
        };

        let trimmed = self.content.trim();
        self.content_error = if trimmed.is_empty() {
            Some("Content is required".to_string())
        } else if trimmed.chars().count() < MIN_CONTENT_CHARS {
            Some(format!(
                "Content must be at least {} characters long",
                MIN_CONTENT_CHARS
            ))
        } else {
            None
        };

        !self.has_errors()
    }

    /// Validate, then hand out the submission and clear the form.
    ///
    /// On validation failure the form keeps its contents and errors.
    pub fn submit(&mut self) -> Option<TextSubmission> {
        if !self.validate() {
            return None;
        }
        let submission = TextSubmission {
            content: self.content.trim().to_string(),
            filename: normalize_text_filename(&self.filename),
        };
        self.clear();
        Some(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(filename: &str, content: &str) -> TextUploadForm {
        TextUploadForm {
            filename: filename.to_string(),
            content: content.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_appends_txt_without_dot() {
        assert_eq!(normalize_text_filename("notes"), "notes.txt");
        assert_eq!(normalize_text_filename("  policy  "), "policy.txt");
    }

    #[test]
    fn test_normalize_keeps_existing_extension() {
        assert_eq!(normalize_text_filename("faq.md"), "faq.md");
        assert_eq!(normalize_text_filename("v1.2-notes"), "v1.2-notes");
    }

    #[test]
    fn test_required_fields() {
        let mut f = form("  ", "");
        assert!(!f.validate());
        assert_eq!(f.filename_error.as_deref(), Some("Filename is required"));
        assert_eq!(f.content_error.as_deref(), Some("Content is required"));
    }

    #[test]
    fn test_content_minimum_length_uses_trimmed_text() {
        let mut f = form("a", "   short    ");
        assert!(!f.validate());
        assert_eq!(
            f.content_error.as_deref(),
            Some("Content must be at least 10 characters long")
        );
    }

    #[test]
    fn test_submit_trims_and_normalizes_then_clears() {
        let mut f = form(" return-policy ", "\n  Returns are accepted for 30 days.  \n");
        let submission = f.submit().expect("valid form");

        assert_eq!(submission.filename, "return-policy.txt");
        assert_eq!(submission.content, "Returns are accepted for 30 days.");
        assert_eq!(f, TextUploadForm::default());
    }

    #[test]
    fn test_invalid_submit_keeps_contents() {
        let mut f = form("draft", "tiny");
        assert!(f.submit().is_none());
        assert_eq!(f.filename, "draft");
        assert_eq!(f.content, "tiny");
        assert!(f.content_error.is_some());
    }

    #[test]
    fn test_typing_clears_field_error() {
        let mut f = form("", "");
        f.validate();
        f.insert_char('a');
        assert!(f.filename_error.is_none());
        assert!(f.content_error.is_some());

        f.switch_focus();
        f.insert_char('b');
        assert!(f.content_error.is_none());
    }

    #[test]
    fn test_filename_stays_single_line() {
        let mut f = TextUploadForm::new();
        f.insert_str("first\nsecond");
        f.insert_char('\n');
        assert_eq!(f.filename, "firstsecond");

        f.switch_focus();
        f.insert_str("line one\r\nline two");
        assert_eq!(f.content, "line one\nline two");
    }

    #[test]
    fn test_counters() {
        let f = form("x", "  hello   brave\nnew world ");
        assert_eq!(f.word_count(), 4);
        assert_eq!(f.char_count(), 26);
        assert_eq!(form("x", "   ").word_count(), 0);
    }

    #[test]
    fn test_can_submit_requires_both_fields() {
        assert!(!form("a", "  ").can_submit());
        assert!(!form(" ", "content").can_submit());
        assert!(form("a", "content").can_submit());
    }
}
