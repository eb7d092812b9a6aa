use std::env;

use serde::{Deserialize, Serialize};

fn default_data_dir() -> String {
    "karuta-data".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding the dictionary, cache and deck documents
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl StoreConfig {
    pub fn new() -> Self {
        let data_dir = env::var("KARUTA_DATA_DIR").unwrap_or_else(|_| default_data_dir());

        Self { data_dir }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}
