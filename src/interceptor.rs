//! Request and response interceptors
//!
//! Interceptors observe the envelope before routing and the final response
//! after handling. They receive shared references and return nothing, so
//! they can neither alter what other components see nor fail the request.

use crate::response::Response;
use crate::types::RequestEnvelope;

/// Observer invoked before routing
pub trait RequestInterceptor: Send + Sync {
    fn process(&self, envelope: &RequestEnvelope);
}

/// Observer invoked with the final response
pub trait ResponseInterceptor: Send + Sync {
    fn process(&self, envelope: &RequestEnvelope, response: &Response);
}

/// Logs the raw inbound envelope, including fields the skill does not model
#[derive(Debug, Default)]
pub struct LogRequestInterceptor;

impl RequestInterceptor for LogRequestInterceptor {
    fn process(&self, envelope: &RequestEnvelope) {
        match envelope.raw_json() {
            Ok(json) => tracing::info!(
                request_type = envelope.request_type(),
                "REQUEST ENVELOPE = {}",
                json
            ),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize request envelope"),
        }
    }
}

/// Logs the outbound response
#[derive(Debug, Default)]
pub struct LogResponseInterceptor;

impl ResponseInterceptor for LogResponseInterceptor {
    fn process(&self, envelope: &RequestEnvelope, response: &Response) {
        match serde_json::to_string(response) {
            Ok(json) => tracing::info!(
                request_type = envelope.request_type(),
                "RESPONSE = {}",
                json
            ),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize response"),
        }
    }
}
