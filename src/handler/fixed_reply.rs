//! Intent handler that answers one named intent with a constant line

use super::RequestHandler;
use crate::error::Result;
use crate::response::{Response, ResponseBuilder};
use crate::types::RequestEnvelope;
use async_trait::async_trait;

pub struct FixedReplyIntentHandler {
    intent_name: String,
    speech: String,
}

impl FixedReplyIntentHandler {
    pub fn new(intent_name: impl Into<String>, speech: impl Into<String>) -> Self {
        Self {
            intent_name: intent_name.into(),
            speech: speech.into(),
        }
    }

    pub fn intent_name(&self) -> &str {
        &self.intent_name
    }
}

#[async_trait]
impl RequestHandler for FixedReplyIntentHandler {
    fn can_handle(&self, envelope: &RequestEnvelope) -> bool {
        envelope.is_intent(&self.intent_name)
    }

    async fn handle(&self, _envelope: &RequestEnvelope) -> Result<Response> {
        Ok(ResponseBuilder::new().speak(self.speech.as_str()).get_response())
    }

    fn name(&self) -> &str {
        "FixedReplyIntentHandler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Intent, IntentRequest, Request};

    fn intent(name: &str) -> RequestEnvelope {
        RequestEnvelope::new(Request::IntentRequest(IntentRequest {
            intent: Intent::new(name),
            ..Default::default()
        }))
    }

    #[tokio::test]
    async fn test_matches_named_intent_only() {
        let h = FixedReplyIntentHandler::new("GetLightIntent", "Bravo Six Going Dark!");
        assert!(h.can_handle(&intent("GetLightIntent")));
        assert!(!h.can_handle(&intent("HelpIntent")));

        let response = h.handle(&intent("GetLightIntent")).await.unwrap();
        assert_eq!(response.speech(), Some("Bravo Six Going Dark!"));
        assert!(response.reprompt().is_none());
    }
}
