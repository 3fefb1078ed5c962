//! Public chatbot addresses and slug rules.

use url::Url;

/// Shown next to the slug field
pub const SLUG_HINT: &str = "Lowercase letters, numbers and hyphens only";

/// Slugs are non-empty and use only `a-z`, `0-9` and `-`
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

pub fn status_label(is_published: bool) -> &'static str {
    if is_published {
        "Live"
    } else {
        "Private"
    }
}

/// `<origin>/<slug>`
pub fn public_path_url(origin: &str, slug: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), slug)
}

/// Host part of the subdomain address, e.g. `acme.example.com:8080`.
///
/// Local origins map to `<slug>.localhost`; otherwise the slug is put in
/// front of the last two labels of the host.
pub fn subdomain_host(origin: &str, slug: &str) -> Option<String> {
    let url = Url::parse(origin).ok()?;
    let host = url.host_str()?;
    let port = url.port().map(|p| format!(":{}", p)).unwrap_or_default();

    let base = if host == "localhost" || host == "127.0.0.1" {
        "localhost".to_string()
    } else {
        let labels: Vec<&str> = host.split('.').collect();
        if labels.len() >= 2 {
            labels[labels.len() - 2..].join(".")
        } else {
            host.to_string()
        }
    };

    Some(format!("{}.{}{}", slug, base, port))
}

/// Full subdomain address including the scheme
pub fn subdomain_url(origin: &str, slug: &str) -> Option<String> {
    let scheme = Url::parse(origin).ok()?.scheme().to_string();
    subdomain_host(origin, slug).map(|host| format!("{}://{}", scheme, host))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_rules() {
        assert!(is_valid_slug("acme"));
        assert!(is_valid_slug("acme-co-2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Acme"));
        assert!(!is_valid_slug("acme co"));
        assert!(!is_valid_slug("acme_co"));
    }

    #[test]
    fn test_public_path_url() {
        assert_eq!(
            public_path_url("https://chat.example.com/", "acme"),
            "https://chat.example.com/acme"
        );
    }

    #[test]
    fn test_subdomain_localhost_keeps_port() {
        assert_eq!(
            subdomain_url("http://localhost:3000", "acme").as_deref(),
            Some("http://acme.localhost:3000")
        );
        assert_eq!(
            subdomain_host("http://127.0.0.1:3000", "acme").as_deref(),
            Some("acme.localhost:3000")
        );
    }

    #[test]
    fn test_subdomain_uses_last_two_labels() {
        assert_eq!(
            subdomain_url("https://app.chat.example.com", "acme").as_deref(),
            Some("https://acme.example.com")
        );
        assert_eq!(
            subdomain_host("https://example.com:8443", "acme").as_deref(),
            Some("acme.example.com:8443")
        );
    }

    #[test]
    fn test_subdomain_invalid_origin() {
        assert!(subdomain_url("not a url", "acme").is_none());
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label(true), "Live");
        assert_eq!(status_label(false), "Private");
    }
}
