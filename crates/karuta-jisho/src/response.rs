use std::collections::HashSet;

use karuta_types::{DEFINITION_SEPARATOR, RemoteEntry, epoch_ms};
use serde::Deserialize;

// JSON structures for the Jisho word-search body
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<SearchCandidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchCandidate {
    #[serde(default)]
    pub japanese: Vec<JapaneseForm>,
    #[serde(default)]
    pub senses: Vec<Sense>,
}

#[derive(Debug, Default, Deserialize)]
pub struct JapaneseForm {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub reading: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Sense {
    #[serde(default)]
    pub english_definitions: Vec<String>,
}

/// Reduce a search response to the single entry worth caching
pub fn parse_response(response: SearchResponse) -> Option<RemoteEntry> {
    let candidate = response.data.into_iter().next()?;

    let form = candidate.japanese.into_iter().next().unwrap_or_default();
    let word = form.word.unwrap_or_default();
    let reading = form.reading.unwrap_or_default();

    // Glosses across all senses, first occurrence wins
    let mut seen = HashSet::new();
    let glosses: Vec<String> = candidate
        .senses
        .into_iter()
        .flat_map(|sense| sense.english_definitions)
        .filter(|gloss| !gloss.is_empty())
        .filter(|gloss| seen.insert(gloss.clone()))
        .collect();

    let definition = if glosses.is_empty() {
        None
    } else {
        Some(glosses.join(DEFINITION_SEPARATOR))
    };

    Some(RemoteEntry {
        word,
        reading,
        definition,
        fetched_at_ms: epoch_ms(),
    })
}
