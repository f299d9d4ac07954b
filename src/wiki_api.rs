//! MediaWiki action API client
//!
//! Fetches the latest revision of a page (main slot, wikitext) with
//! `formatversion=2`, which returns `pages` as a list and `missing` as a bool.

use crate::config::Config;
use crate::error::LookupError;
use serde::Deserialize;
use url::Url;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Result of a page query
#[derive(Debug, Clone, PartialEq)]
pub enum PageLookup {
    Missing,
    Content { title: String, content: String },
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: Option<Query>,
}

#[derive(Debug, Deserialize)]
struct Query {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    title: String,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
    #[serde(default)]
    revisions: Vec<Revision>,
}

#[derive(Debug, Deserialize)]
struct Revision {
    slots: Slots,
}

#[derive(Debug, Deserialize)]
struct Slots {
    main: Slot,
}

#[derive(Debug, Deserialize)]
struct Slot {
    #[serde(default)]
    content: String,
}

impl PageLookup {
    /// Interpret a query response body
    pub fn from_json(body: &str) -> Result<PageLookup, LookupError> {
        let response: QueryResponse = serde_json::from_str(body)?;

        let page = response
            .query
            .and_then(|q| q.pages.into_iter().next())
            .ok_or_else(|| LookupError::Malformed("response has no pages".to_string()))?;

        if page.missing || page.invalid {
            return Ok(PageLookup::Missing);
        }

        let revision = page.revisions.into_iter().next().ok_or_else(|| {
            LookupError::Malformed(format!("page {} has no revisions", page.title))
        })?;

        Ok(PageLookup::Content {
            title: page.title,
            content: revision.slots.main.content,
        })
    }
}

/// Build the revision-content query for a title
pub fn query_url(endpoint: &str, title: &str) -> Result<Url, LookupError> {
    Url::parse_with_params(
        endpoint,
        &[
            ("action", "query"),
            ("prop", "revisions"),
            ("titles", title),
            ("rvslots", "*"),
            ("rvprop", "content"),
            ("formatversion", "2"),
            ("format", "json"),
        ],
    )
    .map_err(|e| LookupError::Network(format!("bad endpoint {}: {}", endpoint, e)))
}

/// Source of page content
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch_page(&self, title: &str) -> Result<PageLookup, LookupError>;
}

/// Fetch-backed client usable from both the popup window and the
/// extension's service worker
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    endpoint: String,
    user_agent: String,
}

impl WikipediaClient {
    pub fn new(config: &Config) -> Self {
        WikipediaClient {
            endpoint: config.api_endpoint.clone(),
            user_agent: config.api_user_agent.clone(),
        }
    }

    async fn get_text(&self, url: &Url) -> Result<String, LookupError> {
        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url.as_str(), &opts)
            .map_err(|e| LookupError::Network(format!("failed to build request: {:?}", e)))?;

        if !self.user_agent.is_empty() {
            request
                .headers()
                .set("Api-User-Agent", &self.user_agent)
                .map_err(|e| LookupError::Network(format!("failed to set header: {:?}", e)))?;
        }

        let resp_value = JsFuture::from(global_fetch(&request)?)
            .await
            .map_err(|e| LookupError::Network(format!("{:?}", e)))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| LookupError::Network("fetch did not return a Response".to_string()))?;

        if !resp.ok() {
            return Err(LookupError::Status(resp.status()));
        }

        let text = JsFuture::from(
            resp.text()
                .map_err(|e| LookupError::Network(format!("failed to read body: {:?}", e)))?,
        )
        .await
        .map_err(|e| LookupError::Network(format!("failed to read body: {:?}", e)))?;

        text.as_string()
            .ok_or_else(|| LookupError::Malformed("response body is not text".to_string()))
    }
}

impl PageSource for WikipediaClient {
    async fn fetch_page(&self, title: &str) -> Result<PageLookup, LookupError> {
        let url = query_url(&self.endpoint, title)?;
        log::debug!("Fetching {}", url);

        let body = self.get_text(&url).await?;
        PageLookup::from_json(&body)
    }
}

/// `fetch` from whichever global scope we are running in
fn global_fetch(request: &Request) -> Result<js_sys::Promise, LookupError> {
    let global = js_sys::global();

    if let Some(window) = global.dyn_ref::<web_sys::Window>() {
        return Ok(window.fetch_with_request(request));
    }

    if let Some(worker) = global.dyn_ref::<web_sys::WorkerGlobalScope>() {
        return Ok(worker.fetch_with_request(request));
    }

    Err(LookupError::Network("no fetch available in this context".to_string()))
}
