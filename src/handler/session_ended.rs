//! Session-ended handler

use super::RequestHandler;
use crate::error::Result;
use crate::response::{Response, ResponseBuilder};
use crate::types::{Request, RequestEnvelope};
use async_trait::async_trait;

/// Acknowledges session termination with an empty response
///
/// The skill holds no per-session state, so there is nothing to clean up.
#[derive(Debug, Default)]
pub struct SessionEndedRequestHandler;

#[async_trait]
impl RequestHandler for SessionEndedRequestHandler {
    fn can_handle(&self, envelope: &RequestEnvelope) -> bool {
        matches!(envelope.request, Request::SessionEndedRequest(_))
    }

    async fn handle(&self, envelope: &RequestEnvelope) -> Result<Response> {
        if let Request::SessionEndedRequest(req) = &envelope.request {
            tracing::debug!(
                reason = req.reason.as_deref().unwrap_or("unknown"),
                error = ?req.error,
                "Session ended"
            );
        }
        Ok(ResponseBuilder::new().get_response())
    }

    fn name(&self) -> &str {
        "SessionEndedRequestHandler"
    }
}
