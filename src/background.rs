/// Background worker: resolve the active tab on every tab update
use crate::browser::{self, ChromeAction, ChromeStorage};
use crate::classifier::Classifier;
use crate::config::Config;
use crate::domain::page_identifier;
use crate::error::LookupError;
use crate::lookup::{IconSink, Resolution, Resolver};
use crate::storage::KeyValueStore;
use crate::tab_data::{Icon, TabInfo};
use crate::wiki_api::{PageSource, WikipediaClient};

/// Handle a `chrome.tabs.onUpdated` event
///
/// Errors stop the chain here and are only logged; the icon keeps
/// whatever state it had.
pub async fn handle_tab_update(config: &Config, classifier: &Classifier) {
    match resolve_active_tab(config, classifier).await {
        Ok(Some(resolution)) => log::debug!("Resolved: {:?}", resolution),
        Ok(None) => {}
        Err(e) => log::error!("Error: {}", e),
    }
}

async fn resolve_active_tab(
    config: &Config,
    classifier: &Classifier,
) -> Result<Option<Resolution>, LookupError> {
    let Some(tab) = browser::active_tab().await? else {
        return Ok(None);
    };

    resolve_tab(
        &tab,
        config,
        classifier,
        ChromeStorage,
        WikipediaClient::new(config),
        ChromeAction,
    )
    .await
}

/// Reset the tab's icon to grey, then resolve its domain
///
/// Returns `None` for pages that are not served over HTTP(S).
pub async fn resolve_tab<S, P, I>(
    tab: &TabInfo,
    config: &Config,
    classifier: &Classifier,
    store: S,
    source: P,
    icons: I,
) -> Result<Option<Resolution>, LookupError>
where
    S: KeyValueStore,
    P: PageSource,
    I: IconSink,
{
    icons.set_icon(Some(tab.id), Icon::Grey).await?;

    let url = tab.url.as_deref().unwrap_or_default();
    log::info!("URL: {}", url);

    let Some(identifier) = page_identifier(url, config.strip_www) else {
        log::info!("Non-web page. Skipping...");
        return Ok(None);
    };

    let resolver = Resolver::new(store, source, icons, classifier, config.max_redirect_hops);

    resolver.resolve(Some(tab.id), &identifier).await.map(Some)
}
