//! Skill configuration
//!
//! Every field has a default, so an empty JSON object is a valid config.

use crate::error::{Result, SkillError};
use crate::handler::error::DEFAULT_APOLOGY;
use crate::weather::WeatherReading;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillConfig {
    /// Intent answered with a constant line
    #[serde(default)]
    pub fixed_reply: FixedReplyConfig,

    /// Spoken and reprompted on any failure
    #[serde(default = "default_apology")]
    pub apology: String,

    /// Alternative recommendation dataset; the embedded one is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation_data: Option<PathBuf>,

    /// Readings served by the in-memory weather provider, keyed by city id
    #[serde(default = "default_weather")]
    pub weather: HashMap<String, WeatherReading>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedReplyConfig {
    #[serde(default = "default_fixed_intent")]
    pub intent_name: String,

    #[serde(default = "default_fixed_speech")]
    pub speech: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive (e.g., "info", "petmatch_skill=debug")
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            fixed_reply: FixedReplyConfig::default(),
            apology: default_apology(),
            recommendation_data: None,
            weather: default_weather(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for FixedReplyConfig {
    fn default() -> Self {
        Self {
            intent_name: default_fixed_intent(),
            speech: default_fixed_speech(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_apology() -> String {
    DEFAULT_APOLOGY.to_string()
}

fn default_fixed_intent() -> String {
    "GetLightIntent".to_string()
}

fn default_fixed_speech() -> String {
    "Bravo Six Going Dark!".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_weather() -> HashMap<String, WeatherReading> {
    [
        ("SEA", WeatherReading::new(45, 58)),
        ("NYC", WeatherReading::new(52, 67)),
        ("SFO", WeatherReading::new(54, 68)),
        ("LAX", WeatherReading::new(61, 77)),
        ("CHI", WeatherReading::new(40, 55)),
    ]
    .into_iter()
    .map(|(id, r)| (id.to_string(), r))
    .collect()
}

impl SkillConfig {
    /// Parse a JSON config document
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| SkillError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load config from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            SkillError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&json)
    }
}
