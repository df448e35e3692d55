use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::ui::UiConfig;

pub mod dictionary;
pub mod ui;

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> Option<String> {
    Some("lexi.log".to_string())
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub ui: UiConfig,

    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log destination while the terminal UI owns stdout
    #[serde(default = "default_log_file")]
    pub log_file: Option<String>,
    pub log_json: bool,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Environment wins over whatever was loaded from a profile
    pub fn apply_env(&mut self) {
        self.dictionary.apply_env();
        self.ui.apply_env();

        if let Ok(level) = env::var("LEXI_LOG") {
            self.log_level = level;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            ui: UiConfig::default(),
            log_level: default_log_level(),
            log_file: default_log_file(),
            log_json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_is_filled_with_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "dictionary": { "timeout_seconds": 5 } }"#).unwrap();

        assert_eq!(config.dictionary.timeout_seconds, Some(5));
        assert_eq!(config.dictionary.base_url, DictionaryConfig::default().base_url);
        assert_eq!(config.ui.tick_rate_ms, 50);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_file.as_deref(), Some("lexi.log"));
    }

    #[test]
    fn empty_object_is_default() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn entry_url_joins_without_double_slash() {
        let mut dictionary = DictionaryConfig::default();
        dictionary.base_url = "http://localhost:9000/entries/en/".to_string();

        assert_eq!(
            dictionary.entry_url("Mouse"),
            "http://localhost:9000/entries/en/Mouse"
        );
    }

    #[test]
    fn entry_url_keeps_word_verbatim() {
        let dictionary = DictionaryConfig::default();
        assert!(dictionary.entry_url(" Hello ").ends_with("/en/ Hello "));
    }
}
