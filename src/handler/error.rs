//! Catch-all error handler

use super::ErrorHandler;
use crate::error::{Result, SkillError};
use crate::response::{Response, ResponseBuilder};
use crate::types::RequestEnvelope;

/// Default apology spoken on any failure
pub const DEFAULT_APOLOGY: &str = "Sorry, I had trouble doing what you asked. Please try again.";

/// Converts every error into the same apology, spoken and reprompted
pub struct ApologyErrorHandler {
    apology: String,
}

impl ApologyErrorHandler {
    pub fn new(apology: impl Into<String>) -> Self {
        Self {
            apology: apology.into(),
        }
    }
}

impl Default for ApologyErrorHandler {
    fn default() -> Self {
        Self::new(DEFAULT_APOLOGY)
    }
}

impl ErrorHandler for ApologyErrorHandler {
    fn can_handle(&self, _envelope: &RequestEnvelope, _error: &SkillError) -> bool {
        true
    }

    fn handle(&self, envelope: &RequestEnvelope, error: &SkillError) -> Result<Response> {
        tracing::error!(
            request_type = envelope.request_type(),
            error = %error,
            details = ?error,
            "Error handled"
        );

        Ok(ResponseBuilder::new()
            .speak(self.apology.as_str())
            .reprompt(self.apology.as_str())
            .get_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Request, UnsupportedRequest};
    use serde_json::json;

    #[test]
    fn test_apology_for_any_error() {
        let envelope = RequestEnvelope::new(Request::Unsupported(UnsupportedRequest::new("LaunchRequest")));
        let h = ApologyErrorHandler::default();

        for error in [
            SkillError::MissingArgument("size".to_string()),
            SkillError::NoHandler {
                request_type: "LaunchRequest".to_string(),
            },
        ] {
            assert!(h.can_handle(&envelope, &error));
            let response = h.handle(&envelope, &error).unwrap();
            assert_eq!(
                serde_json::to_value(&response).unwrap(),
                json!({"speech": DEFAULT_APOLOGY, "reprompt": DEFAULT_APOLOGY})
            );
        }
    }

    #[test]
    fn test_custom_apology() {
        let h = ApologyErrorHandler::new("Oops.");
        let envelope = RequestEnvelope::new(Request::Unsupported(UnsupportedRequest::new("LaunchRequest")));
        let response = h
            .handle(&envelope, &SkillError::Config("bad".to_string()))
            .unwrap();
        assert_eq!(response.speech(), Some("Oops."));
        assert_eq!(response.reprompt(), Some("Oops."));
    }
}
