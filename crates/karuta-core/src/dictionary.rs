use std::collections::HashMap;

use karuta_store::{KeyValueStore, StoreError, read_key};
use karuta_types::DictionaryEntry;

/// Store key holding the user dictionary
pub const DICTIONARY_KEY: &str = "dictionary";

/// A hit in the local dictionary
#[derive(Debug, Clone, Copy)]
pub struct LocalMatch<'a> {
    /// The key that matched, not necessarily the queried term
    pub found_for: &'a str,
    pub entry: &'a DictionaryEntry,
}

/// Preloaded headword map, checked before any remote call
#[derive(Debug, Default)]
pub struct LocalDictionary {
    entries: HashMap<String, DictionaryEntry>,
}

impl LocalDictionary {
    pub fn new(entries: HashMap<String, DictionaryEntry>) -> Self {
        Self { entries }
    }

    /// Load from the store; a missing document is an empty dictionary
    pub async fn load(store: &dyn KeyValueStore) -> Result<Self, StoreError> {
        match read_key(store, DICTIONARY_KEY).await? {
            Some(entries) => {
                let dictionary = Self::new(entries);
                tracing::info!("Loaded {} dictionary entries", dictionary.len());
                Ok(dictionary)
            }
            None => {
                tracing::warn!("No dictionary in store, starting empty");
                Ok(Self::default())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Any key, for inspection output
    pub fn sample_key(&self) -> Option<&str> {
        self.entries.keys().next().map(String::as_str)
    }

    /// Key lookup that ignores entries without glosses
    fn defined(&self, key: &str) -> Option<LocalMatch<'_>> {
        self.entries
            .get_key_value(key)
            .filter(|(_, entry)| entry.has_definitions())
            .map(|(found_for, entry)| LocalMatch { found_for, entry })
    }

    /// Tiered match: exact, する-stripped, then longest prefix of two or more characters
    pub fn match_term(&self, term: &str) -> Option<LocalMatch<'_>> {
        if term.is_empty() {
            return None;
        }

        if let Some(hit) = self.defined(term) {
            return Some(hit);
        }

        // する-verbs: 勉強する → 勉強 (stripped once, never recursively)
        if let Some(stem) = term.strip_suffix("する") {
            if let Some(hit) = self.defined(stem) {
                return Some(hit);
            }
        }

        self.longest_prefix(term)
    }

    fn longest_prefix(&self, term: &str) -> Option<LocalMatch<'_>> {
        let ends: Vec<usize> = term
            .char_indices()
            .map(|(index, c)| index + c.len_utf8())
            .collect();

        // Longest first; one-character prefixes match far too much
        ends.iter()
            .skip(1)
            .rev()
            .find_map(|&end| self.defined(&term[..end]))
    }
}
