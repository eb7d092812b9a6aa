use karuta_types::{Resolution, ResolutionSource};
use serde::{Deserialize, Serialize};

/// Definition recorded when nothing resolved
pub const NO_DEFINITION: &str = "No definition found";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    pub term: String,
    #[serde(default)]
    pub reading: String,
    #[serde(default)]
    pub definition: String,
    /// None when the term never resolved
    #[serde(default)]
    pub source: Option<ResolutionSource>,
    #[serde(default)]
    pub found_for: Option<String>,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl Flashcard {
    /// Card for a term, filled from its resolution when there is one
    pub fn resolved(term: String, resolution: Option<Resolution>) -> Self {
        match resolution {
            Some(resolution) => Self {
                term,
                reading: resolution.reading,
                definition: resolution.definition,
                source: Some(resolution.source),
                found_for: Some(resolution.found_for),
                examples: vec![],
            },
            None => Self {
                term,
                reading: String::new(),
                definition: NO_DEFINITION.to_string(),
                source: None,
                found_for: None,
                examples: vec![],
            },
        }
    }
}
