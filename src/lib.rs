/// Wikiflag - Chrome Extension flagging sites by their Wikipedia categories
/// Built with Rust + WASM + Yew

pub mod background;
pub mod browser;
pub mod classifier;
pub mod config;
pub mod domain;
pub mod error;
pub mod lookup;
pub mod storage;
pub mod tab_data;
pub mod ui;
pub mod wiki_api;
pub mod wikitext;

use classifier::Classifier;
use config::Config;
use error::ConfigError;
use std::sync::OnceLock;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Configuration and the classifier built from it, loaded once per context
pub struct AppContext {
    pub config: Config,
    pub classifier: Classifier,
}

impl AppContext {
    pub fn load() -> Result<AppContext, ConfigError> {
        let config = Config::bundled()?;
        let classifier = Classifier::new(&config)?;
        Ok(AppContext { config, classifier })
    }
}

static CONTEXT: OnceLock<AppContext> = OnceLock::new();

fn context() -> Result<&'static AppContext, JsValue> {
    if let Some(context) = CONTEXT.get() {
        return Ok(context);
    }

    let context = AppContext::load().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        JsValue::from_str(&e.to_string())
    })?;

    Ok(CONTEXT.get_or_init(|| context))
}

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Called from the background worker's chrome.tabs.onUpdated listener
#[wasm_bindgen]
pub fn on_tab_updated() -> Result<(), JsValue> {
    let context = context()?;

    spawn_local(async move {
        background::handle_tab_update(&context.config, &context.classifier).await;
    });

    Ok(())
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() -> Result<(), JsValue> {
    let context = context()?;
    yew::Renderer::<ui::popup::App>::with_props(ui::popup::AppProps { context }).render();
    Ok(())
}
