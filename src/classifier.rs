/// Category classifier shared by the background worker and the popup
///
/// Every comparison is case-insensitive: literals are lowercased once at
/// construction and patterns are compiled with the `i` flag.
use crate::config::Config;
use crate::error::ConfigError;
use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone)]
pub struct Classifier {
    substrings: Vec<String>,
    patterns: Vec<Regex>,
}

impl Classifier {
    pub fn new(config: &Config) -> Result<Classifier, ConfigError> {
        let substrings = config
            .problematic_categories
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase())
            .collect();

        let patterns = config
            .problematic_patterns
            .iter()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| ConfigError::InvalidPattern {
                        pattern: pattern.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Classifier {
            substrings,
            patterns,
        })
    }

    /// Check a single category against both denylists
    pub fn is_problematic_category(&self, category: &str) -> bool {
        let lowered = category.to_lowercase();

        self.substrings.iter().any(|s| lowered.contains(s.as_str()))
            || self.patterns.iter().any(|re| re.is_match(category))
    }

    /// True when any category is problematic; empty input is never problematic
    pub fn is_problematic(&self, categories: &[String]) -> bool {
        categories.iter().any(|c| self.is_problematic_category(c))
    }

    /// The problematic categories, in their original order
    pub fn flagged<'a>(&self, categories: &'a [String]) -> Vec<&'a str> {
        categories
            .iter()
            .filter(|c| self.is_problematic_category(c))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new(&Config::default()).unwrap()
    }

    fn cats(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_is_not_problematic() {
        assert!(!classifier().is_problematic(&[]));
    }

    #[test]
    fn test_substring_match_any_case() {
        let c = classifier();
        assert!(c.is_problematic(&cats(&["Pseudoscience"])));
        assert!(c.is_problematic(&cats(&["Websites promoting PSEUDOSCIENCE"])));
        assert!(c.is_problematic(&cats(&["Living people", "Pseudoscience literature"])));
    }

    #[test]
    fn test_pattern_match_any_case() {
        let c = classifier();
        assert!(c.is_problematic(&cats(&["Mass media-related controversies in the United States"])));
        assert!(c.is_problematic(&cats(&["MASS MEDIA-RELATED CONTROVERSIES"])));
    }

    #[test]
    fn test_clean_categories() {
        let c = classifier();
        assert!(!c.is_problematic(&cats(&[
            "American news websites",
            "Science websites",
            "Mass media companies",
        ])));
    }

    #[test]
    fn test_flagged_keeps_order() {
        let c = classifier();
        let categories = cats(&[
            "Pseudoscience",
            "Companies based in Ohio",
            "Mass media-related controversies",
        ]);

        assert_eq!(
            c.flagged(&categories),
            vec!["Pseudoscience", "Mass media-related controversies"]
        );
    }

    #[test]
    fn test_invalid_pattern_is_config_error() {
        let config = Config {
            problematic_patterns: vec!["(unclosed".to_string()],
            ..Config::default()
        };

        assert!(matches!(
            Classifier::new(&config),
            Err(ConfigError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_custom_denylist() {
        let config = Config {
            problematic_categories: vec!["Satire".to_string()],
            problematic_patterns: vec![r"^satirical\b".to_string()],
            ..Config::default()
        };
        let c = Classifier::new(&config).unwrap();

        assert!(c.is_problematic_category("American satire websites"));
        assert!(c.is_problematic_category("Satirical news websites"));
        assert!(!c.is_problematic_category("Pseudoscience"));
    }
}
