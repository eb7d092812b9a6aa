use async_trait::async_trait;
use karuta_lookup::{LookupError, RemoteLookup};
use karuta_types::RemoteEntry;

use crate::response::{SearchResponse, parse_response};

/// Client for the Jisho word-search API
#[derive(Clone)]
pub struct JishoClient {
    base_url: String,
    client: reqwest::Client,
}

impl JishoClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RemoteLookup for JishoClient {
    async fn lookup(&self, term: &str) -> Result<Option<RemoteEntry>, LookupError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("keyword", term)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }

        let body: SearchResponse = response.json().await?;
        let entry = parse_response(body);

        match &entry {
            Some(found) => tracing::debug!("Jisho hit for '{}': word '{}'", term, found.word),
            None => tracing::debug!("Jisho returned no entries for '{}'", term),
        }

        Ok(entry)
    }
}
