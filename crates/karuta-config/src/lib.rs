use serde::{Deserialize, Serialize};

use self::lookup::LookupConfig;
use self::store::StoreConfig;

pub mod lookup;
pub mod store;

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub lookup: LookupConfig,
    pub store: StoreConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            lookup: LookupConfig::new(),
            store: StoreConfig::new(),
        }
    }
}
