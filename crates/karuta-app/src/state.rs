use std::sync::Arc;

use anyhow::{Context, Result};
use karuta_cards::Deck;
use karuta_config::Config;
use karuta_core::cache::LookupCache;
use karuta_core::dictionary::LocalDictionary;
use karuta_core::remote::RemoteResolver;
use karuta_core::resolver::Resolver;
use karuta_jisho::JishoClient;
use karuta_store::JsonFileStore;

pub struct AppContext {
    pub resolver: Resolver,
    pub deck: Deck,
}

impl AppContext {
    /// Wire store, dictionary, lookup client and deck from config
    pub async fn init(config: &Config) -> Result<Self> {
        let store = Arc::new(JsonFileStore::new(config.store.data_dir.clone()));

        let dictionary = LocalDictionary::load(store.as_ref())
            .await
            .context("Failed to load the local dictionary")?;

        let client = Arc::new(JishoClient::new(config.lookup.api_url.clone()));
        let cache = LookupCache::new(store.clone(), config.lookup.cache_ttl_ms);
        let remote = RemoteResolver::new(client, cache);

        Ok(Self {
            resolver: Resolver::new(dictionary, remote),
            deck: Deck::new(store),
        })
    }
}
