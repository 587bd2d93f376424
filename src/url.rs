//! URL touch-up for CLI input.

/// Fill in the scheme for URLs given without one.
///
/// Input with a recognized scheme passes through untouched; nothing is ever
/// rejected here, a nonsensical URL simply fails at navigation time.
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();

    let has_scheme = ["http://", "https://", "file://", "data:", "about:", "chrome://"]
        .iter()
        .any(|scheme| trimmed.starts_with(scheme));

    if has_scheme {
        return trimmed.to_string();
    }

    // Local addresses rarely serve TLS
    if trimmed.starts_with("localhost") || trimmed.starts_with("127.0.0.1") {
        return format!("http://{}", trimmed);
    }

    format!("https://{}", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_urls_pass_through() {
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
        assert_eq!(normalize_url("http://example.com/path"), "http://example.com/path");
        assert_eq!(normalize_url("about:blank"), "about:blank");
        assert_eq!(normalize_url("file:///tmp/page.html"), "file:///tmp/page.html");
        assert_eq!(
            normalize_url("data:text/html,<h1>Test</h1>"),
            "data:text/html,<h1>Test</h1>"
        );
    }

    #[test]
    fn test_bare_domains_get_https() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("sub.example.com/docs"), "https://sub.example.com/docs");
    }

    #[test]
    fn test_local_addresses_get_http() {
        assert_eq!(normalize_url("localhost:3000"), "http://localhost:3000");
        assert_eq!(normalize_url("127.0.0.1:8080"), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_surrounding_whitespace_is_dropped() {
        assert_eq!(normalize_url("  example.com  "), "https://example.com");
        assert_eq!(normalize_url(" https://example.com "), "https://example.com");
    }
}
