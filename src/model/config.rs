use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Configuration from config.toml in the fade directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Milliseconds between marking a row completed and removing it.
    /// Undo is possible until the countdown elapses.
    #[serde(default = "default_countdown_ms")]
    pub countdown_ms: u64,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            countdown_ms: default_countdown_ms(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    pub fn countdown(&self) -> Duration {
        Duration::from_millis(self.countdown_ms)
    }
}

fn default_countdown_ms() -> u64 {
    2000
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides keyed by theme slot name (e.g. background = "#101014")
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
