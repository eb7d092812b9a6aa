use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Separator between glosses when a definition is rendered as one string
pub const DEFINITION_SEPARATOR: &str = " ; ";

/// One local dictionary entry: reading plus glosses, keyed by headword elsewhere
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DictionaryEntry {
    #[serde(default)]
    pub reading: String,
    #[serde(default)]
    pub definitions: Vec<String>,
}

impl DictionaryEntry {
    /// An entry with no glosses cannot answer a lookup
    pub fn has_definitions(&self) -> bool {
        !self.definitions.is_empty()
    }
}

/// A remote lookup outcome as kept in the lookup cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteEntry {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub reading: String,
    /// None means the service had the term but no usable glosses
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub fetched_at_ms: u64,
}

impl RemoteEntry {
    /// Age relative to `now_ms`, clamped to zero for clock skew
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.fetched_at_ms)
    }
}

/// Which tier produced a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionSource {
    Local,
    Remote,
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionSource::Local => write!(f, "local"),
            ResolutionSource::Remote => write!(f, "remote"),
        }
    }
}

/// A resolved term ready for display or capture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    pub source: ResolutionSource,
    /// The dictionary key or remote headword that actually matched
    pub found_for: String,
    pub reading: String,
    pub definition: String,
}

/// Milliseconds since the Unix epoch
pub fn epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
