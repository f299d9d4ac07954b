/// Data structures crossing the JS bridge
use serde::{Deserialize, Serialize};

/// The active browser tab, as reported by `chrome.tabs.query`
///
/// `url` is absent for tabs the extension may not inspect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabInfo {
    pub id: i32,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Toolbar icon states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Lookup in progress, nothing flagged
    Grey,
    /// At least one category is problematic
    Yellow,
}

impl Icon {
    pub fn for_verdict(problematic: bool) -> Icon {
        if problematic { Icon::Yellow } else { Icon::Grey }
    }

    pub fn path(self) -> &'static str {
        match self {
            Icon::Grey => "icon-grey.png",
            Icon::Yellow => "icon-yellow.png",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_info_deserialization() {
        let tab: TabInfo =
            serde_json::from_str(r#"{"id": 7, "url": "https://example.com", "title": "Example", "pinned": false}"#)
                .unwrap();

        assert_eq!(tab.id, 7);
        assert_eq!(tab.url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_tab_info_without_url() {
        let tab: TabInfo = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(tab.url, None);
    }

    #[test]
    fn test_icon_paths() {
        assert_eq!(Icon::for_verdict(true).path(), "icon-yellow.png");
        assert_eq!(Icon::for_verdict(false).path(), "icon-grey.png");
    }
}
