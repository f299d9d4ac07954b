/// Error types shared by the background worker and the popup
use thiserror::Error;

/// Errors raised while resolving a page's categories
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("network request failed: {0}")]
    Network(String),

    #[error("wikipedia answered with HTTP {0}")]
    Status(u16),

    #[error("malformed API response: {0}")]
    Malformed(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("browser storage failed: {0}")]
    Storage(String),

    #[error("tab query failed: {0}")]
    Tabs(String),

    #[error("failed to set icon: {0}")]
    Icon(String),

    #[error("redirect on page {0} has no link target")]
    BadRedirect(String),

    #[error("redirect loop detected at {0}")]
    RedirectLoop(String),

    #[error("redirect chain exceeded {0} hops")]
    TooManyRedirects(usize),
}

/// Errors raised while loading the bundled configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid URL for {field}: {source}")]
    InvalidUrl {
        field: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid category pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("max_redirect_hops must be at least 1")]
    NoRedirectHops,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_messages() {
        assert_eq!(
            LookupError::Status(503).to_string(),
            "wikipedia answered with HTTP 503"
        );
        assert_eq!(
            LookupError::TooManyRedirects(5).to_string(),
            "redirect chain exceeded 5 hops"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let err: LookupError = serde_json::from_str::<Vec<String>>("{").unwrap_err().into();
        assert!(matches!(err, LookupError::Json(_)));
    }
}
