use std::sync::Arc;

use karuta_lookup::RemoteLookup;
use karuta_types::RemoteEntry;

use crate::cache::{CacheState, LookupCache};
use crate::singleflight::InFlight;

/// Remote tier: cache first, deduplicated fetch, cache write-back
#[derive(Clone)]
pub struct RemoteResolver {
    transport: Arc<dyn RemoteLookup>,
    cache: LookupCache,
    inflight: InFlight,
}

impl RemoteResolver {
    pub fn new(transport: Arc<dyn RemoteLookup>, cache: LookupCache) -> Self {
        Self {
            transport,
            cache,
            inflight: InFlight::new(),
        }
    }

    /// Resolve `term` remotely; every failure collapses to None by the time it returns
    pub async fn fetch(&self, term: &str) -> Option<RemoteEntry> {
        let stale = match self.cache.lookup(term).await {
            CacheState::Fresh(entry) => {
                tracing::debug!("Serving '{}' from lookup cache", term);
                return Some(entry);
            }
            CacheState::Stale(entry) => Some(entry),
            CacheState::Miss => None,
        };

        let transport = Arc::clone(&self.transport);
        let cache = self.cache.clone();
        let key = term.to_string();

        self.inflight
            .run(term, async move {
                match transport.lookup(&key).await {
                    Ok(Some(entry)) => {
                        if let Err(e) = cache.insert(&key, entry.clone()).await {
                            tracing::error!("Failed to persist lookup for '{}': {}", key, e);
                        }
                        Some(entry)
                    }
                    Ok(None) => None,
                    Err(e) => {
                        tracing::warn!("Remote lookup failed for '{}': {}", key, e);
                        if let Some(entry) = stale {
                            tracing::info!("Serving stale cache entry for '{}'", key);
                            Some(entry)
                        } else {
                            None
                        }
                    }
                }
            })
            .await
    }
}
