//! Weather provider trait — the collaborator behind the weather API
//!
//! The skill asks a `WeatherProvider` for a temperature range by city id.
//! Retry and timeout policy belong to the provider, not the skill.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod memory;

pub use memory::MemoryWeatherProvider;

/// Core trait for weather backends
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch the temperature range for a city id
    async fn get_weather(&self, city_id: &str) -> Result<WeatherReading>;

    /// Provider name (e.g., "memory")
    fn name(&self) -> &str;
}

/// Low/high temperature pair for one location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    pub low_temperature: i32,
    pub high_temperature: i32,
}

/// The `apiResponse` body returned by the weather API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub city_name: String,
    pub low_temperature: i32,
    pub high_temperature: i32,
}

impl WeatherReading {
    pub fn new(low_temperature: i32, high_temperature: i32) -> Self {
        Self {
            low_temperature,
            high_temperature,
        }
    }
}

impl WeatherReport {
    /// Attach a display name to a reading
    pub fn new(city_name: impl Into<String>, reading: WeatherReading) -> Self {
        Self {
            city_name: city_name.into(),
            low_temperature: reading.low_temperature,
            high_temperature: reading.high_temperature,
        }
    }
}
