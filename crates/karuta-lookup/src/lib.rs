use karuta_types::RemoteEntry;

/// Remote lookup provider interface
#[async_trait::async_trait]
pub trait RemoteLookup: Send + Sync {
    /// Look up a normalized term; Ok(None) means the service has no entry for it
    async fn lookup(&self, term: &str) -> Result<Option<RemoteEntry>, LookupError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Lookup service returned status {0}")]
    Status(u16),
}
