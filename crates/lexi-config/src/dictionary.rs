use std::env;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

fn default_user_agent() -> String {
    concat!("lexi/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Lookups go to `<base_url>/<word>`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// No timeout when unset
    pub timeout_seconds: Option<u64>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl DictionaryConfig {
    pub fn apply_env(&mut self) {
        if let Ok(base_url) = env::var("LEXI_BASE_URL") {
            self.base_url = base_url;
        }

        if let Some(secs) = env::var("LEXI_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.timeout_seconds = Some(secs);
        }
    }

    /// URL for a word, passed through as typed
    pub fn entry_url(&self, word: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), word)
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: None,
            user_agent: default_user_agent(),
        }
    }
}
