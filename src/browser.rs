/// Bindings to the chrome.* extension APIs via the JS bridge
use crate::error::LookupError;
use crate::lookup::IconSink;
use crate::storage::KeyValueStore;
use crate::tab_data::{Icon, TabInfo};
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/js/bridge.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn setIcon(tab_id: JsValue, path: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;
}

/// `chrome.storage.local`, holding JSON strings
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeStorage;

impl KeyValueStore for ChromeStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, LookupError> {
        let value = getStorage(key)
            .await
            .map_err(|e| LookupError::Storage(format!("failed to read {}: {:?}", key, e)))?;

        if value.is_null() || value.is_undefined() {
            return Ok(None);
        }

        value
            .as_string()
            .map(Some)
            .ok_or_else(|| LookupError::Storage(format!("{} does not hold a string", key)))
    }

    async fn set(&self, key: &str, value: Option<String>) -> Result<(), LookupError> {
        let js_value = match value {
            Some(json) => JsValue::from_str(&json),
            None => JsValue::NULL,
        };

        setStorage(key, js_value)
            .await
            .map_err(|e| LookupError::Storage(format!("failed to write {}: {:?}", key, e)))
    }
}

/// `chrome.action` toolbar icon
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeAction;

impl IconSink for ChromeAction {
    async fn set_icon(&self, tab_id: Option<i32>, icon: Icon) -> Result<(), LookupError> {
        let tab_id = tab_id.map(JsValue::from).unwrap_or(JsValue::UNDEFINED);

        setIcon(tab_id, icon.path())
            .await
            .map_err(|e| LookupError::Icon(format!("{:?}", e)))
    }
}

/// Active tab of the current window, if any
pub async fn active_tab() -> Result<Option<TabInfo>, LookupError> {
    let tab_js = getActiveTab()
        .await
        .map_err(|e| LookupError::Tabs(format!("{:?}", e)))?;

    if tab_js.is_null() || tab_js.is_undefined() {
        return Ok(None);
    }

    serde_wasm_bindgen::from_value(tab_js)
        .map(Some)
        .map_err(|e| LookupError::Malformed(format!("failed to parse tab: {:?}", e)))
}
