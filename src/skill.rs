//! Skill entry point: ordered request routing with interceptors and error handling
//!
//! `Skill` holds the request handler chain, the error handler chain and the
//! interceptors. It is built once at startup and shared across invocations;
//! nothing in it is mutated per request.

use crate::config::SkillConfig;
use crate::error::{Result, SkillError};
use crate::handler::{
    ApologyErrorHandler, ErrorHandler, FixedReplyIntentHandler, GetWeatherApiHandler,
    IntentReflectorHandler, RecommendationApiHandler, RequestHandler, SessionEndedRequestHandler,
};
use crate::interceptor::{
    LogRequestInterceptor, LogResponseInterceptor, RequestInterceptor, ResponseInterceptor,
};
use crate::recommendation::RecommendationTable;
use crate::response::Response;
use crate::types::RequestEnvelope;
use crate::weather::{MemoryWeatherProvider, WeatherProvider};
use std::sync::Arc;

/// A configured skill
pub struct Skill {
    request_handlers: Vec<Box<dyn RequestHandler>>,
    error_handlers: Vec<Box<dyn ErrorHandler>>,
    request_interceptors: Vec<Box<dyn RequestInterceptor>>,
    response_interceptors: Vec<Box<dyn ResponseInterceptor>>,
}

impl Skill {
    /// Start building a custom skill
    pub fn builder() -> SkillBuilder {
        SkillBuilder::default()
    }

    /// The standard pet-match skill over the given data and weather provider
    ///
    /// Handlers are registered in priority order with the intent reflector
    /// last, so specific handlers always win.
    pub fn pet_match(
        config: &SkillConfig,
        table: Arc<RecommendationTable>,
        weather: Arc<dyn WeatherProvider>,
    ) -> Self {
        Self::builder()
            .add_request_handler(GetWeatherApiHandler::new(weather))
            .add_request_handler(RecommendationApiHandler::new(table))
            .add_request_handler(FixedReplyIntentHandler::new(
                config.fixed_reply.intent_name.as_str(),
                config.fixed_reply.speech.as_str(),
            ))
            .add_request_handler(SessionEndedRequestHandler)
            .add_request_handler(IntentReflectorHandler)
            .add_error_handler(ApologyErrorHandler::new(config.apology.as_str()))
            .add_request_interceptor(LogRequestInterceptor)
            .add_response_interceptor(LogResponseInterceptor)
            .build()
    }

    /// Build the standard skill from config, loading its data sources
    pub fn from_config(config: &SkillConfig) -> Result<Self> {
        let table = match &config.recommendation_data {
            Some(path) => RecommendationTable::from_path(path)?,
            None => RecommendationTable::builtin()?,
        };
        let weather = MemoryWeatherProvider::new(config.weather.clone());

        tracing::info!(
            recommendations = table.len(),
            weather_cities = weather.len(),
            "Skill initialized"
        );

        Ok(Self::pet_match(config, Arc::new(table), Arc::new(weather)))
    }

    /// Route an envelope to the first matching handler
    ///
    /// Interceptors and error handlers are not involved; failures are
    /// returned to the caller.
    pub async fn dispatch(&self, envelope: &RequestEnvelope) -> Result<Response> {
        let handler = self
            .request_handlers
            .iter()
            .find(|h| h.can_handle(envelope))
            .ok_or_else(|| SkillError::NoHandler {
                request_type: envelope.request_type().to_string(),
            })?;

        tracing::debug!(
            handler = handler.name(),
            request_type = envelope.request_type(),
            "Request routed"
        );

        handler.handle(envelope).await
    }

    /// Run the full pipeline: interceptors, routing, and error handling
    ///
    /// Returns an error only when no error handler accepts a failure.
    pub async fn invoke(&self, envelope: &RequestEnvelope) -> Result<Response> {
        for interceptor in &self.request_interceptors {
            interceptor.process(envelope);
        }

        let response = match self.dispatch(envelope).await {
            Ok(response) => response,
            Err(error) => self.handle_error(envelope, error)?,
        };

        for interceptor in &self.response_interceptors {
            interceptor.process(envelope, &response);
        }

        Ok(response)
    }

    /// Parse a JSON envelope, invoke, and serialize the response
    pub async fn invoke_json(&self, json: &str) -> Result<String> {
        let envelope: RequestEnvelope =
            serde_json::from_str(json).map_err(SkillError::InvalidEnvelope)?;
        let response = self.invoke(&envelope).await?;
        Ok(serde_json::to_string(&response)?)
    }

    /// Names of the registered request handlers, in routing order
    pub fn handler_names(&self) -> Vec<&str> {
        self.request_handlers.iter().map(|h| h.name()).collect()
    }

    fn handle_error(&self, envelope: &RequestEnvelope, error: SkillError) -> Result<Response> {
        match self
            .error_handlers
            .iter()
            .find(|h| h.can_handle(envelope, &error))
        {
            Some(handler) => handler.handle(envelope, &error),
            None => Err(error),
        }
    }
}

/// Builder that registers handlers and interceptors in order
#[derive(Default)]
pub struct SkillBuilder {
    request_handlers: Vec<Box<dyn RequestHandler>>,
    error_handlers: Vec<Box<dyn ErrorHandler>>,
    request_interceptors: Vec<Box<dyn RequestInterceptor>>,
    response_interceptors: Vec<Box<dyn ResponseInterceptor>>,
}

impl SkillBuilder {
    pub fn add_request_handler(mut self, handler: impl RequestHandler + 'static) -> Self {
        self.request_handlers.push(Box::new(handler));
        self
    }

    pub fn add_error_handler(mut self, handler: impl ErrorHandler + 'static) -> Self {
        self.error_handlers.push(Box::new(handler));
        self
    }

    pub fn add_request_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.request_interceptors.push(Box::new(interceptor));
        self
    }

    pub fn add_response_interceptor(mut self, interceptor: impl ResponseInterceptor + 'static) -> Self {
        self.response_interceptors.push(Box::new(interceptor));
        self
    }

    pub fn build(self) -> Skill {
        Skill {
            request_handlers: self.request_handlers,
            error_handlers: self.error_handlers,
            request_interceptors: self.request_interceptors,
            response_interceptors: self.response_interceptors,
        }
    }
}
