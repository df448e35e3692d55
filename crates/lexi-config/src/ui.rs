use std::env;

use serde::{Deserialize, Serialize};

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_placeholder() -> String {
    "Search for a word".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Terminal poll interval
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl UiConfig {
    pub fn apply_env(&mut self) {
        if let Some(ms) = env::var("LEXI_TICK_MS").ok().and_then(|v| v.parse().ok()) {
            self.tick_rate_ms = ms;
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            placeholder: default_placeholder(),
        }
    }
}
