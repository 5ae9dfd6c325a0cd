//! Widget Configuration
//!
//! Settings the host page can embed as JSON. Every field is optional.

use serde::{Deserialize, Serialize};

use crate::seed::SeedSource;

const DEFAULT_LOG_CAPACITY: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Remote JSON array to seed the list from (None = built-in defaults)
    pub seed_url: Option<String>,
    /// One of error, warn, info, debug, trace
    pub log_level: String,
    /// How many log lines the rolling logger keeps
    pub log_capacity: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            seed_url: None,
            log_level: "info".to_string(),
            log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}

impl WidgetConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn seed_source(&self) -> SeedSource {
        SeedSource::from_url(self.seed_url.as_deref())
    }

    /// Parsed log level, `Info` when unrecognised
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
