/// Storage serialization for chrome.storage.local
///
/// Both keys hold JSON strings: the category cache is one serialized map,
/// the snapshot is a serialized list (or null).
use crate::error::LookupError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const CACHE_KEY: &str = "misinformation_cache";
pub const SNAPSHOT_KEY: &str = "current_page";

/// Persistent string store
#[allow(async_fn_in_trait)]
pub trait KeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, LookupError>;

    /// Store `value`, or null when `None`
    async fn set(&self, key: &str, value: Option<String>) -> Result<(), LookupError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    async fn get(&self, key: &str) -> Result<Option<String>, LookupError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: Option<String>) -> Result<(), LookupError> {
        (**self).set(key, value).await
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub categories: Vec<String>,
}

/// Identifier → categories; entries never expire
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCache {
    entries: HashMap<String, CacheEntry>,
}

impl CategoryCache {
    pub fn new() -> Self {
        CategoryCache::default()
    }

    pub async fn load<S: KeyValueStore>(store: &S) -> Result<CategoryCache, LookupError> {
        match store.get(CACHE_KEY).await? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(CategoryCache::new()),
        }
    }

    pub async fn save<S: KeyValueStore>(&self, store: &S) -> Result<(), LookupError> {
        let json = serde_json::to_string(self)?;
        store.set(CACHE_KEY, Some(json)).await
    }

    pub fn get(&self, identifier: &str) -> Option<&CacheEntry> {
        self.entries.get(identifier)
    }

    pub fn insert(&mut self, identifier: &str, categories: Vec<String>) {
        self.entries
            .insert(identifier.to_string(), CacheEntry { categories });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Re-read the cache, add one entry and write it back
pub async fn store_categories<S: KeyValueStore>(
    store: &S,
    identifier: &str,
    categories: &[String],
) -> Result<(), LookupError> {
    let mut cache = CategoryCache::load(store).await?;
    cache.insert(identifier, categories.to_vec());
    cache.save(store).await?;
    log::debug!("Saved {} to cache", identifier);
    Ok(())
}

/// Categories of the most recently resolved page; empty when cleared
pub async fn load_snapshot<S: KeyValueStore>(store: &S) -> Result<Vec<String>, LookupError> {
    match store.get(SNAPSHOT_KEY).await? {
        Some(json) => Ok(serde_json::from_str::<Option<Vec<String>>>(&json)?.unwrap_or_default()),
        None => Ok(Vec::new()),
    }
}

pub async fn save_snapshot<S: KeyValueStore>(
    store: &S,
    categories: &[String],
) -> Result<(), LookupError> {
    let json = serde_json::to_string(categories)?;
    store.set(SNAPSHOT_KEY, Some(json)).await
}

pub async fn clear_snapshot<S: KeyValueStore>(store: &S) -> Result<(), LookupError> {
    store.set(SNAPSHOT_KEY, None).await
}
