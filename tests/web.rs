//! Browser tests, run with `wasm-pack test --headless --chrome`
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use wikiflag::classifier::Classifier;
use wikiflag::config::Config;
use wikiflag::wiki_api::PageLookup;
use wikiflag::{wikitext, AppContext};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn bundled_context_loads() {
    let context = AppContext::load().unwrap();
    assert_eq!(context.config, Config::bundled().unwrap());
}

#[wasm_bindgen_test]
fn response_to_verdict() {
    let body = r#"{"query":{"pages":[{"title":"Example","revisions":[{"slots":{"main":{"content":"[[Category:Pseudoscience|*]] [[Category:Websites]]"}}}]}]}}"#;

    let PageLookup::Content { content, .. } = PageLookup::from_json(body).unwrap() else {
        panic!("expected page content");
    };
    let categories = wikitext::extract_categories(&content);
    let classifier = Classifier::new(&Config::default()).unwrap();

    assert_eq!(categories, vec!["Pseudoscience", "Websites"]);
    assert!(classifier.is_problematic(&categories));
}
