//! # petmatch-skill
//!
//! Voice skill back end: routes structured request envelopes to handlers,
//! resolves slot values through entity resolution, and answers with spoken
//! text or an API response body.
//!
//! ## Quick Start
//!
//! ```rust
//! use petmatch_skill::{Skill, SkillConfig};
//!
//! # async fn example() -> petmatch_skill::Result<()> {
//! let skill = Skill::from_config(&SkillConfig::default())?;
//!
//! let response = skill
//!     .invoke_json(r#"{"request": {"type": "IntentRequest", "intent": {"name": "GetLightIntent"}}}"#)
//!     .await?;
//!
//! assert_eq!(response, r#"{"speech":"Bravo Six Going Dark!"}"#);
//! # Ok(())
//! # }
//! ```
//!
//! ## Handlers
//!
//! In routing order:
//!
//! - **GetWeatherApiHandler** — `GetWeatherApi` invocations, via a `WeatherProvider`
//! - **RecommendationApiHandler** — `getRecommendation` invocations, via the recommendation table
//! - **FixedReplyIntentHandler** — one configured intent, constant reply
//! - **SessionEndedRequestHandler** — empty acknowledgement
//! - **IntentReflectorHandler** — any other intent, echoes its name
//!
//! Failures from routing or any handler go to `ApologyErrorHandler`.

pub mod config;
pub mod error;
pub mod handler;
pub mod interceptor;
pub mod recommendation;
pub mod resolver;
pub mod response;
pub mod skill;
pub mod telemetry;
pub mod types;
pub mod weather;

// Re-export core types
pub use config::{FixedReplyConfig, LoggingConfig, SkillConfig};
pub use error::{Result, SkillError};
pub use handler::{ErrorHandler, RequestHandler};
pub use interceptor::{RequestInterceptor, ResponseInterceptor};
pub use recommendation::{RecommendationEntity, RecommendationRecord, RecommendationTable};
pub use resolver::{resolve_entity, resolve_entity_with_id};
pub use response::{Response, ResponseBuilder};
pub use skill::{Skill, SkillBuilder};
pub use types::{
    ApiInvocationRequest, ApiRequest, Intent, IntentRequest, Request, RequestEnvelope,
    SessionEndedRequest, Slot, StatusCode, UnsupportedRequest,
};
pub use weather::{MemoryWeatherProvider, WeatherProvider, WeatherReading, WeatherReport};
