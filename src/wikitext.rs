/// Wikitext helpers: category links and redirects
use regex::Regex;
use std::sync::LazyLock;

static CATEGORY_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[Category:(.*?)\]\]").expect("category link pattern is valid")
});

const REDIRECT_MARKER: &str = "#REDIRECT";

/// Extract category names in order of appearance
///
/// `[[Category:Foo|sort key]]` yields `Foo`. Duplicates and empty names
/// are kept.
pub fn extract_categories(content: &str) -> Vec<String> {
    CATEGORY_LINK
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| {
            let name = m.as_str();
            let name = name.split('|').next().unwrap_or(name);
            name.trim().to_string()
        })
        .collect()
}

pub fn is_redirect(content: &str) -> bool {
    let start = content.trim_start();
    start
        .get(..REDIRECT_MARKER.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(REDIRECT_MARKER))
}

/// Target title of a redirect page
///
/// Returns `None` for regular pages and `Some("")` when the redirect has no
/// usable link.
pub fn redirect_target(content: &str) -> Option<String> {
    if !is_redirect(content) {
        return None;
    }

    let target = content
        .split_once("[[")
        .and_then(|(_, rest)| rest.split_once("]]"))
        .map(|(link, _)| link)
        .unwrap_or("");

    // Anchors point into the target page, they are not part of its title
    let target = target.split('#').next().unwrap_or("");

    Some(target.trim().to_string())
}
