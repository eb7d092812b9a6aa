use std::env;

use karuta_core::cache::DEFAULT_TTL_MS;
use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://jisho.org/api/v1/search/words".to_string()
}

fn default_cache_ttl_ms() -> u64 {
    DEFAULT_TTL_MS
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LookupConfig {
    /// Word-search endpoint, queried with ?keyword=
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_cache_ttl_ms")]
    pub cache_ttl_ms: u64,
}

impl LookupConfig {
    pub fn new() -> Self {
        let api_url = env::var("KARUTA_API_URL").unwrap_or_else(|_| default_api_url());

        let cache_ttl_ms = env::var("KARUTA_CACHE_TTL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TTL_MS);

        Self {
            api_url,
            cache_ttl_ms,
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            cache_ttl_ms: default_cache_ttl_ms(),
        }
    }
}
