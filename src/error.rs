//! Error types for petmatch-skill

use thiserror::Error;

/// Errors that can occur while handling a skill request
#[derive(Debug, Error)]
pub enum SkillError {
    /// No registered request handler accepted the envelope
    #[error("Unable to find a suitable request handler for request type '{request_type}'")]
    NoHandler { request_type: String },

    /// Slot structure does not match what entity resolution expects
    #[error("Malformed slot '{slot}': {reason}")]
    MalformedSlot { slot: String, reason: String },

    /// API invocation argument absent
    #[error("Missing API argument: {0}")]
    MissingArgument(String),

    /// Weather collaborator failed to produce a reading
    #[error("Weather unavailable for city '{city_id}': {reason}")]
    WeatherUnavailable { city_id: String, reason: String },

    /// Recommendation dataset could not be loaded
    #[error("Recommendation data error: {0}")]
    RecommendationData(String),

    /// Inbound envelope failed to parse
    #[error("Invalid request envelope: {0}")]
    InvalidEnvelope(#[source] serde_json::Error),

    /// Serialization/deserialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O failure at the process boundary
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for skill operations
pub type Result<T> = std::result::Result<T, SkillError>;
