//! Request and error handler traits, plus the skill's concrete handlers
//!
//! A `RequestHandler` claims an envelope through `can_handle` and answers it
//! through `handle`. The router asks handlers in registration order, so a
//! catch-all such as the intent reflector must be registered last.

use crate::error::{Result, SkillError};
use crate::response::Response;
use crate::types::RequestEnvelope;
use async_trait::async_trait;

pub mod error;
pub mod fixed_reply;
pub mod recommendation;
pub mod reflector;
pub mod session_ended;
pub mod weather;

pub use error::ApologyErrorHandler;
pub use fixed_reply::FixedReplyIntentHandler;
pub use recommendation::RecommendationApiHandler;
pub use reflector::IntentReflectorHandler;
pub use session_ended::SessionEndedRequestHandler;
pub use weather::GetWeatherApiHandler;

/// A request handler in the routing chain
#[async_trait]
pub trait RequestHandler: Send + Sync {
    /// Whether this handler accepts the envelope
    fn can_handle(&self, envelope: &RequestEnvelope) -> bool;

    /// Produce a response for an accepted envelope
    async fn handle(&self, envelope: &RequestEnvelope) -> Result<Response>;

    /// Handler name used in logs
    fn name(&self) -> &str;
}

/// A handler in the error chain, consulted when routing or a request handler fails
pub trait ErrorHandler: Send + Sync {
    fn can_handle(&self, envelope: &RequestEnvelope, error: &SkillError) -> bool;

    fn handle(&self, envelope: &RequestEnvelope, error: &SkillError) -> Result<Response>;
}
