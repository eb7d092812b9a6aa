use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::fs;

use crate::{KeyValueStore, StoreError};

/// One pretty-printed JSON document per key inside a data directory
pub struct JsonFileStore {
    dir: PathBuf,
    write_seq: AtomicU64,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_seq: AtomicU64::new(0),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    // unique per writer and per call, so parallel writes never share a scratch file
    fn scratch_for(&self, key: &str) -> PathBuf {
        let seq = self.write_seq.fetch_add(1, Ordering::Relaxed);
        self.dir
            .join(format!("{key}.json.{}.{seq}.tmp", std::process::id()))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(data) => Ok(Some(serde_json::from_str(&data)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).await?;
        // scratch write plus rename: readers only ever see a whole document
        let scratch = self.scratch_for(key);
        fs::write(&scratch, serde_json::to_string_pretty(&value)?).await?;
        fs::rename(&scratch, self.path_for(key)).await?;
        Ok(())
    }
}
