mod client;
mod parse;

pub use client::FreeDictionaryClient;
pub use parse::extract_definitions;

/// Dictionary provider interface
#[async_trait::async_trait]
pub trait DictionaryApi: Send + Sync {
    /// First definition of each meaning of the first entry for `word`.
    /// Unexpected response shapes yield an empty list, not an error.
    async fn define(&self, word: &str) -> Result<Vec<String>, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub base_url: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    StatusError(reqwest::StatusCode),

    #[error("Failed to parse response: {0}")]
    DecodeError(String),
}
