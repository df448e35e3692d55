use std::time::Duration;

use async_trait::async_trait;
use lexi_config::dictionary::DictionaryConfig;

use crate::parse::extract_definitions;
use crate::{DictionaryApi, LookupError, ProviderMetadata};

/// Client for the free dictionary API (`<base>/<word>`)
#[derive(Clone)]
pub struct FreeDictionaryClient {
    client: reqwest::Client,
    config: DictionaryConfig,
}

impl FreeDictionaryClient {
    pub fn new(config: DictionaryConfig) -> Result<Self, LookupError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());

        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }
}

#[async_trait]
impl DictionaryApi for FreeDictionaryClient {
    async fn define(&self, word: &str) -> Result<Vec<String>, LookupError> {
        let url = self.config.entry_url(word);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(LookupError::StatusError(response.status()));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LookupError::DecodeError(e.to_string()))?;

        let definitions = extract_definitions(&json);
        tracing::debug!("'{}': {} definitions", word, definitions.len());

        Ok(definitions)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Free Dictionary API".to_string(),
            base_url: self.config.base_url.clone(),
            requires_api_key: false,
        }
    }
}
