//! In-memory weather provider
//!
//! Serves fixed readings from a map keyed by city id. Suitable for tests
//! and for deployments where weather is mocked.

use super::{WeatherProvider, WeatherReading};
use crate::error::{Result, SkillError};
use async_trait::async_trait;
use std::collections::HashMap;

/// Weather provider backed by a static reading table
#[derive(Debug, Clone, Default)]
pub struct MemoryWeatherProvider {
    readings: HashMap<String, WeatherReading>,
}

impl MemoryWeatherProvider {
    pub fn new(readings: HashMap<String, WeatherReading>) -> Self {
        Self { readings }
    }

    /// Add or replace the reading for a city id
    pub fn with_reading(mut self, city_id: impl Into<String>, reading: WeatherReading) -> Self {
        self.readings.insert(city_id.into(), reading);
        self
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

#[async_trait]
impl WeatherProvider for MemoryWeatherProvider {
    async fn get_weather(&self, city_id: &str) -> Result<WeatherReading> {
        let reading = self
            .readings
            .get(city_id)
            .copied()
            .ok_or_else(|| SkillError::WeatherUnavailable {
                city_id: city_id.to_string(),
                reason: "no reading for city".to_string(),
            })?;

        tracing::debug!(
            city_id = %city_id,
            low = reading.low_temperature,
            high = reading.high_temperature,
            "Weather reading served"
        );
        Ok(reading)
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_city() {
        let provider = MemoryWeatherProvider::default().with_reading("X", WeatherReading::new(10, 20));
        let reading = provider.get_weather("X").await.unwrap();
        assert_eq!(reading.low_temperature, 10);
        assert_eq!(reading.high_temperature, 20);
        assert_eq!(provider.name(), "memory");
    }

    #[tokio::test]
    async fn test_unknown_city() {
        let provider = MemoryWeatherProvider::default();
        let err = provider.get_weather("nowhere").await.unwrap_err();
        assert!(matches!(err, SkillError::WeatherUnavailable { ref city_id, .. } if city_id == "nowhere"));
    }

    #[test]
    fn test_with_reading_replaces() {
        let provider = MemoryWeatherProvider::default()
            .with_reading("X", WeatherReading::new(1, 2))
            .with_reading("X", WeatherReading::new(3, 4));
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_reading_serialization() {
        let json = serde_json::to_string(&WeatherReading::new(-5, 3)).unwrap();
        assert!(json.contains("\"lowTemperature\":-5"));
        assert!(json.contains("\"highTemperature\":3"));
    }
}
