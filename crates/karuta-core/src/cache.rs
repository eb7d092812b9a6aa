use std::collections::HashMap;
use std::sync::Arc;

use karuta_store::{KeyValueStore, StoreError, read_key, write_key};
use karuta_types::{RemoteEntry, epoch_ms};

/// Store key holding the remote lookup cache
pub const CACHE_KEY: &str = "lookup_cache";

/// Default entry lifetime: thirty days
pub const DEFAULT_TTL_MS: u64 = 1000 * 60 * 60 * 24 * 30;

type CacheRecord = HashMap<String, RemoteEntry>;

/// Outcome of a cache probe
#[derive(Debug, Clone)]
pub enum CacheState {
    /// Younger than the TTL, usable as-is
    Fresh(RemoteEntry),
    /// Expired but still present, kept around for degraded fallback
    Stale(RemoteEntry),
    Miss,
}

/// Whole-record TTL cache of remote lookups
#[derive(Clone)]
pub struct LookupCache {
    store: Arc<dyn KeyValueStore>,
    ttl_ms: u64,
}

impl LookupCache {
    pub fn new(store: Arc<dyn KeyValueStore>, ttl_ms: u64) -> Self {
        Self { store, ttl_ms }
    }

    /// Probe for `term`; read failures are logged misses
    pub async fn lookup(&self, term: &str) -> CacheState {
        let record: CacheRecord = match read_key(self.store.as_ref(), CACHE_KEY).await {
            Ok(Some(record)) => record,
            Ok(None) => return CacheState::Miss,
            Err(e) => {
                tracing::warn!("Failed to read lookup cache: {}", e);
                return CacheState::Miss;
            }
        };

        match record.get(term) {
            Some(entry) if entry.age_ms(epoch_ms()) < self.ttl_ms => {
                CacheState::Fresh(entry.clone())
            }
            Some(entry) => CacheState::Stale(entry.clone()),
            None => CacheState::Miss,
        }
    }

    /// Read-modify-write of the whole record; concurrent writers race, last one wins
    pub async fn insert(&self, term: &str, entry: RemoteEntry) -> Result<(), StoreError> {
        let mut record: CacheRecord = match read_key(self.store.as_ref(), CACHE_KEY).await {
            Ok(existing) => existing.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("Rebuilding unreadable lookup cache: {}", e);
                CacheRecord::default()
            }
        };

        record.insert(term.to_string(), entry);
        write_key(self.store.as_ref(), CACHE_KEY, &record).await
    }
}
