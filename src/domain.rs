/// Page identifier derivation from tab URLs
use url::Url;

/// Derive the lookup identifier for a tab URL
///
/// Algorithm:
/// 1. Parse the URL; reject anything that is not `http` or `https`
/// 2. Take the hostname, lowercased by the parser
/// 3. Drop a leading `www.` when `strip_www` is set
///
/// Examples:
/// - https://www.breitbart.com/politics → breitbart.com
/// - http://infowars.com → infowars.com
/// - chrome://extensions → None
pub fn page_identifier(url: &str, strip_www: bool) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;

    if !is_web_scheme(parsed.scheme()) {
        return None;
    }

    let host = parsed.host_str()?;
    let host = host.trim_end_matches('.');

    let host = if strip_www {
        host.strip_prefix("www.").unwrap_or(host)
    } else {
        host
    };

    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}

fn is_web_scheme(scheme: &str) -> bool {
    matches!(scheme, "http" | "https")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_identifier_basic() {
        assert_eq!(page_identifier("https://example.com", true), Some("example.com".to_string()));
        assert_eq!(page_identifier("http://example.com/path?q=1", true), Some("example.com".to_string()));
    }

    #[test]
    fn test_page_identifier_strips_www() {
        assert_eq!(page_identifier("https://www.example.com", true), Some("example.com".to_string()));
        assert_eq!(page_identifier("https://www.example.com", false), Some("www.example.com".to_string()));
    }

    #[test]
    fn test_page_identifier_keeps_subdomains() {
        assert_eq!(page_identifier("https://news.bbc.co.uk/article", true), Some("news.bbc.co.uk".to_string()));
    }

    #[test]
    fn test_page_identifier_lowercases() {
        assert_eq!(page_identifier("HTTPS://Example.COM/", true), Some("example.com".to_string()));
    }

    #[test]
    fn test_page_identifier_port_and_ip() {
        assert_eq!(page_identifier("http://localhost:3000", true), Some("localhost".to_string()));
        assert_eq!(page_identifier("http://127.0.0.1:8080", true), Some("127.0.0.1".to_string()));
    }

    #[test]
    fn test_page_identifier_non_web_pages() {
        assert_eq!(page_identifier("chrome://extensions", true), None);
        assert_eq!(page_identifier("about:blank", true), None);
        assert_eq!(page_identifier("file:///home/user/index.html", true), None);
        assert_eq!(page_identifier("ftp://example.com", true), None);
    }

    #[test]
    fn test_page_identifier_invalid() {
        assert_eq!(page_identifier("", true), None);
        assert_eq!(page_identifier("not-a-url", true), None);
    }
}
