use karuta_types::{DEFINITION_SEPARATOR, Resolution, ResolutionSource};

use crate::dictionary::LocalDictionary;
use crate::normalize::normalize;
use crate::remote::RemoteResolver;

/// Tiered term resolution: local dictionary first, cached remote lookup after
pub struct Resolver {
    dictionary: LocalDictionary,
    remote: RemoteResolver,
}

impl Resolver {
    pub fn new(dictionary: LocalDictionary, remote: RemoteResolver) -> Self {
        Self { dictionary, remote }
    }

    pub fn dictionary(&self) -> &LocalDictionary {
        &self.dictionary
    }

    /// Resolve a raw term; None means nothing was found anywhere
    pub async fn resolve(&self, raw_term: &str) -> Option<Resolution> {
        let term = normalize(raw_term);
        if term.is_empty() {
            return None;
        }

        if let Some(hit) = self.dictionary.match_term(&term) {
            return Some(Resolution {
                source: ResolutionSource::Local,
                found_for: hit.found_for.to_string(),
                reading: hit.entry.reading.clone(),
                definition: hit.entry.definitions.join(DEFINITION_SEPARATOR),
            });
        }

        let entry = self.remote.fetch(&term).await?;
        let definition = entry.definition?;

        let found_for = if entry.word.is_empty() {
            term
        } else {
            entry.word
        };

        Some(Resolution {
            source: ResolutionSource::Remote,
            found_for,
            reading: entry.reading,
            definition,
        })
    }
}
