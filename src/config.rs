use std::time::Duration;

use crate::{
    error::ConfigError,
    input::GestureConfig,
    nav::PaneTopology,
    search::{SELECTION_DELAY, TYPE_AHEAD_DELAY},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub gesture: GestureConfig,
    pub search_delay: Duration,
    pub selection_delay: Duration,
    pub topology: PaneTopology,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            search_delay: TYPE_AHEAD_DELAY,
            selection_delay: SELECTION_DELAY,
            topology: PaneTopology::Split,
        }
    }
}

impl Config {
    /// Reads overrides from the process environment, after loading `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(ms) = parse::<u64>(&lookup, "KODIREMOTE_GESTURE_GAP_MS")? {
            config.gesture.gap = Duration::from_millis(ms);
        }
        if let Some(threshold) = parse::<f32>(&lookup, "KODIREMOTE_GESTURE_THRESHOLD")? {
            if !(threshold > 0.0 && threshold <= 2.0) {
                return Err(ConfigError::Invalid {
                    key: "KODIREMOTE_GESTURE_THRESHOLD",
                    value: threshold.to_string(),
                });
            }
            config.gesture.threshold = threshold;
        }
        if let Some(ms) = parse::<u64>(&lookup, "KODIREMOTE_SEARCH_DELAY_MS")? {
            config.search_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = parse::<u64>(&lookup, "KODIREMOTE_SELECTION_DELAY_MS")? {
            config.selection_delay = Duration::from_millis(ms);
        }
        if let Some(value) = lookup("KODIREMOTE_TOPOLOGY") {
            config.topology = match value.trim().to_ascii_lowercase().as_str() {
                "split" => PaneTopology::Split,
                "stack" => PaneTopology::Stack,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "KODIREMOTE_TOPOLOGY",
                        value,
                    });
                }
            };
        }

        Ok(config)
    }
}

fn parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(None),
    }
}
