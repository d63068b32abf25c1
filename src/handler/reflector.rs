//! Intent reflector: repeats back the name of any intent
//!
//! Used for interaction-model testing. Matches every intent request, so it
//! must be the last request handler registered.

use super::RequestHandler;
use crate::error::Result;
use crate::response::{Response, ResponseBuilder};
use crate::types::RequestEnvelope;
use async_trait::async_trait;

#[derive(Debug, Default)]
pub struct IntentReflectorHandler;

#[async_trait]
impl RequestHandler for IntentReflectorHandler {
    fn can_handle(&self, envelope: &RequestEnvelope) -> bool {
        envelope.intent().is_some()
    }

    async fn handle(&self, envelope: &RequestEnvelope) -> Result<Response> {
        let intent_name = envelope.intent_name().unwrap_or_default();
        Ok(ResponseBuilder::new()
            .speak(format!("You just triggered {}", intent_name))
            .get_response())
    }

    fn name(&self) -> &str {
        "IntentReflectorHandler"
    }
}
