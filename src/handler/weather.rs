//! `GetWeatherApi` handler

use super::RequestHandler;
use crate::error::Result;
use crate::resolver::resolve_optional;
use crate::response::Response;
use crate::types::RequestEnvelope;
use crate::weather::{WeatherProvider, WeatherReport};
use async_trait::async_trait;
use std::sync::Arc;

/// API name this handler answers
pub const GET_WEATHER_API: &str = "GetWeatherApi";

/// Slot carrying the city entity
pub const CITY_SLOT: &str = "cityName";

/// Answers weather API invocations from a `WeatherProvider`
///
/// An unresolved city yields an empty `apiResponse` and the provider is
/// not consulted; the response template decides how to render that.
pub struct GetWeatherApiHandler {
    provider: Arc<dyn WeatherProvider>,
}

impl GetWeatherApiHandler {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl RequestHandler for GetWeatherApiHandler {
    fn can_handle(&self, envelope: &RequestEnvelope) -> bool {
        envelope.is_api_request(GET_WEATHER_API)
    }

    async fn handle(&self, envelope: &RequestEnvelope) -> Result<Response> {
        let city = match envelope.api_request() {
            Some(api) => resolve_optional(&api.slots, CITY_SLOT)?,
            None => None,
        };

        let city = match city {
            Some(c) => c,
            None => {
                tracing::debug!("City did not resolve, returning empty API response");
                return Ok(Response::empty_api());
            }
        };

        let reading = self.provider.get_weather(&city.id).await?;

        tracing::debug!(
            city_id = %city.id,
            city_name = %city.name,
            provider = self.provider.name(),
            "Weather resolved"
        );

        Response::api_entity(&WeatherReport::new(city.name, reading))
    }

    fn name(&self) -> &str {
        "GetWeatherApiHandler"
    }
}
