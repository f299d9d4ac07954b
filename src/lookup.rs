//! Category lookup: cache first, then the wiki, following redirects
//!
//! A resolution follows at most `max_hops` redirects. Each title is looked
//! up in the cache before touching the network. Fetched
//! categories are cached under the title whose content produced them.

use crate::classifier::Classifier;
use crate::error::LookupError;
use crate::storage::{self, CategoryCache, KeyValueStore};
use crate::tab_data::Icon;
use crate::wiki_api::{PageLookup, PageSource};
use crate::wikitext;
use std::collections::HashSet;

/// Toolbar icon updates
#[allow(async_fn_in_trait)]
pub trait IconSink {
    /// Set the icon for one tab, or globally when `tab_id` is `None`
    async fn set_icon(&self, tab_id: Option<i32>, icon: Icon) -> Result<(), LookupError>;
}

impl<T: IconSink + ?Sized> IconSink for &T {
    async fn set_icon(&self, tab_id: Option<i32>, icon: Icon) -> Result<(), LookupError> {
        (**self).set_icon(tab_id, icon).await
    }
}

/// How a resolution ended
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Cached {
        identifier: String,
        categories: Vec<String>,
        problematic: bool,
    },
    Fetched {
        identifier: String,
        categories: Vec<String>,
        problematic: bool,
    },
    Missing {
        identifier: String,
    },
}

impl Resolution {
    pub fn is_problematic(&self) -> bool {
        match self {
            Resolution::Cached { problematic, .. } | Resolution::Fetched { problematic, .. } => {
                *problematic
            }
            Resolution::Missing { .. } => false,
        }
    }
}

pub struct Resolver<'a, S, P, I> {
    store: S,
    source: P,
    icons: I,
    classifier: &'a Classifier,
    max_hops: usize,
}

impl<'a, S, P, I> Resolver<'a, S, P, I>
where
    S: KeyValueStore,
    P: PageSource,
    I: IconSink,
{
    pub fn new(store: S, source: P, icons: I, classifier: &'a Classifier, max_hops: usize) -> Self {
        Resolver {
            store,
            source,
            icons,
            classifier,
            max_hops,
        }
    }

    /// Resolve `identifier`, update the icon for `tab_id`, cache and snapshot
    pub async fn resolve(
        &self,
        tab_id: Option<i32>,
        identifier: &str,
    ) -> Result<Resolution, LookupError> {
        let mut current = identifier.to_string();
        let mut visited = HashSet::new();
        let mut redirects = 0;

        loop {
            if !visited.insert(current.clone()) {
                return Err(LookupError::RedirectLoop(current));
            }

            let cache = CategoryCache::load(&self.store).await?;
            if let Some(entry) = cache.get(&current) {
                log::info!("Using cache for {}", current);
                let categories = entry.categories.clone();
                let problematic = self.publish(tab_id, &categories).await?;
                return Ok(Resolution::Cached {
                    identifier: current,
                    categories,
                    problematic,
                });
            }

            let content = match self.source.fetch_page(&current).await? {
                PageLookup::Missing => {
                    log::info!("Page not found: {}", current);
                    storage::clear_snapshot(&self.store).await?;
                    return Ok(Resolution::Missing { identifier: current });
                }
                PageLookup::Content { content, .. } => content,
            };

            if let Some(target) = wikitext::redirect_target(&content) {
                if target.is_empty() {
                    return Err(LookupError::BadRedirect(current));
                }
                redirects += 1;
                if redirects > self.max_hops {
                    return Err(LookupError::TooManyRedirects(self.max_hops));
                }
                log::debug!("{} redirects to {}", current, target);
                current = target;
                continue;
            }

            let categories = wikitext::extract_categories(&content);
            storage::store_categories(&self.store, &current, &categories).await?;
            let problematic = self.publish(tab_id, &categories).await?;

            return Ok(Resolution::Fetched {
                identifier: current,
                categories,
                problematic,
            });
        }
    }

    /// Classify, set the icon and write the popup snapshot
    async fn publish(&self, tab_id: Option<i32>, categories: &[String]) -> Result<bool, LookupError> {
        let problematic = self.classifier.is_problematic(categories);

        self.icons
            .set_icon(tab_id, Icon::for_verdict(problematic))
            .await?;
        storage::save_snapshot(&self.store, categories).await?;

        Ok(problematic)
    }
}
