//! Parsing of dropped or pasted file paths.
//!
//! Terminals deliver drag-and-drop as pasted text. Depending on the terminal
//! that text is a shell-escaped path (`/tmp/my\ file.pdf`), a quoted path
//! (`'/tmp/my file.pdf'`), a `file://` URL, or several of those separated by
//! whitespace or newlines.

use std::path::PathBuf;

/// Split pasted text into a batch of paths, in the order they appear.
pub fn parse_dropped_paths(text: &str) -> Vec<PathBuf> {
    text.lines()
        .flat_map(split_shell_words)
        .filter(|token| !token.is_empty())
        .map(|token| token_to_path(&token))
        .collect()
}

/// Whitespace-separated words honoring single/double quotes and backslash
/// escapes of whitespace, quotes and backslashes.
fn split_shell_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (None, '\'' | '"') => quote = Some(c),
            (None, '\\') => match chars.peek() {
                Some(&next) if next.is_whitespace() || matches!(next, '\'' | '"' | '\\') => {
                    current.push(next);
                    chars.next();
                }
                // Literal backslash (Windows separators)
                _ => current.push('\\'),
            },
            (None, c) if c.is_whitespace() => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            (_, c) => current.push(c),
        }
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn token_to_path(token: &str) -> PathBuf {
    if token.starts_with("file://") {
        if let Some(path) = url::Url::parse(token)
            .ok()
            .and_then(|u| u.to_file_path().ok())
        {
            return path;
        }
    }

    if let Some(rest) = token.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    PathBuf::from(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_plain_path() {
        assert_eq!(
            parse_dropped_paths("/docs/handbook.pdf"),
            vec![PathBuf::from("/docs/handbook.pdf")]
        );
    }

    #[test]
    fn test_escaped_spaces() {
        assert_eq!(
            parse_dropped_paths("/docs/team\\ handbook.pdf"),
            vec![PathBuf::from("/docs/team handbook.pdf")]
        );
    }

    #[test]
    fn test_quoted_paths_and_multiple_entries() {
        assert_eq!(
            parse_dropped_paths("'/docs/a b.md' \"/docs/c d.txt\" /docs/e.pdf"),
            vec![
                PathBuf::from("/docs/a b.md"),
                PathBuf::from("/docs/c d.txt"),
                PathBuf::from("/docs/e.pdf"),
            ]
        );
    }

    #[test]
    fn test_newline_separated_batch_keeps_order() {
        let paths = parse_dropped_paths("/b.txt\r\n/a.txt\n\n/c.txt");
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/b.txt"),
                PathBuf::from("/a.txt"),
                PathBuf::from("/c.txt"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_file_url_is_percent_decoded() {
        assert_eq!(
            parse_dropped_paths("file:///docs/team%20handbook.pdf"),
            vec![PathBuf::from("/docs/team handbook.pdf")]
        );
    }

    #[test]
    fn test_backslash_before_letter_is_literal() {
        assert_eq!(
            parse_dropped_paths("C:\\docs\\a.txt"),
            vec![PathBuf::from("C:\\docs\\a.txt")]
        );
    }

    #[test]
    fn test_blank_input_yields_nothing() {
        assert!(parse_dropped_paths("   \n  ").is_empty());
    }
}
