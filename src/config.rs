/// Extension configuration, loaded once from the bundled `config.json`
use crate::error::ConfigError;
use serde::Deserialize;
use url::Url;

const BUNDLED_CONFIG: &str = include_str!("../config.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// MediaWiki action API queried for page content
    pub api_endpoint: String,
    /// Prefix for the category links shown in the popup
    pub wiki_base_url: String,
    /// Sent as `Api-User-Agent`; browsers refuse to override `User-Agent`
    pub api_user_agent: String,
    /// Literal substrings that flag a category
    pub problematic_categories: Vec<String>,
    /// Regular expressions that flag a category
    pub problematic_patterns: Vec<String>,
    pub max_redirect_hops: usize,
    /// Look up `example.com` for `www.example.com`
    pub strip_www: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_endpoint: "https://en.wikipedia.org/w/api.php".to_string(),
            wiki_base_url: "https://en.wikipedia.org/wiki/".to_string(),
            api_user_agent: format!("wikiflag/{}", env!("CARGO_PKG_VERSION")),
            problematic_categories: vec!["pseudoscience".to_string()],
            problematic_patterns: vec!["mass media-related controversies".to_string()],
            max_redirect_hops: 5,
            strip_www: true,
        }
    }
}

impl Config {
    /// Load the configuration compiled into the extension
    pub fn bundled() -> Result<Config, ConfigError> {
        Config::from_json(BUNDLED_CONFIG)
    }

    pub fn from_json(json: &str) -> Result<Config, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.api_endpoint).map_err(|source| ConfigError::InvalidUrl {
            field: "api_endpoint",
            source,
        })?;
        Url::parse(&self.wiki_base_url).map_err(|source| ConfigError::InvalidUrl {
            field: "wiki_base_url",
            source,
        })?;

        if self.max_redirect_hops == 0 {
            return Err(ConfigError::NoRedirectHops);
        }

        Ok(())
    }

    /// Link to a category's page on the wiki, name percent-encoded as one
    /// path segment
    pub fn category_url(&self, category: &str) -> String {
        let name = category.replace(' ', "_");

        match Url::parse(&self.wiki_base_url) {
            Ok(mut url) => {
                if let Ok(mut segments) = url.path_segments_mut() {
                    segments.pop_if_empty().push(&name);
                }
                url.to_string()
            }
            Err(_) => format!("{}{}", self.wiki_base_url, name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_loads() {
        let config = Config::bundled().unwrap();

        assert_eq!(config.api_endpoint, "https://en.wikipedia.org/w/api.php");
        assert_eq!(config.problematic_categories, vec!["pseudoscience"]);
        assert_eq!(
            config.problematic_patterns,
            vec!["mass media-related controversies"]
        );
        assert_eq!(config.max_redirect_hops, 5);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = Config::from_json(r#"{ "max_redirect_hops": 2 }"#).unwrap();

        assert_eq!(config.max_redirect_hops, 2);
        assert_eq!(config.wiki_base_url, Config::default().wiki_base_url);
        assert!(config.strip_www);
    }

    #[test]
    fn test_rejects_bad_endpoint() {
        let result = Config::from_json(r#"{ "api_endpoint": "not a url" }"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidUrl { field: "api_endpoint", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_hops() {
        let result = Config::from_json(r#"{ "max_redirect_hops": 0 }"#);
        assert!(matches!(result, Err(ConfigError::NoRedirectHops)));
    }

    #[test]
    fn test_category_url() {
        let config = Config::default();
        assert_eq!(
            config.category_url("Mass media-related controversies"),
            "https://en.wikipedia.org/wiki/Mass_media-related_controversies"
        );
    }

    #[test]
    fn test_category_url_escapes_reserved_characters() {
        let config = Config::default();
        assert_eq!(
            config.category_url("What? #1 at 100%"),
            "https://en.wikipedia.org/wiki/What%3F_%231_at_100%25"
        );
    }

    #[test]
    fn test_category_url_base_without_trailing_slash() {
        let config = Config {
            wiki_base_url: "https://en.wikipedia.org/wiki".to_string(),
            ..Config::default()
        };
        assert_eq!(
            config.category_url("Pseudoscience"),
            "https://en.wikipedia.org/wiki/Pseudoscience"
        );
    }
}
