//! `getRecommendation` handler

use super::RequestHandler;
use crate::error::{Result, SkillError};
use crate::recommendation::{composite_key, RecommendationEntity, RecommendationTable};
use crate::resolver::resolve_entity;
use crate::response::Response;
use crate::types::{ApiRequest, RequestEnvelope};
use async_trait::async_trait;
use std::sync::Arc;

/// API name this handler answers
pub const GET_RECOMMENDATION_API: &str = "getRecommendation";

/// Recommends a breed from energy, size and temperament
///
/// The lookup uses canonical slot values; the response echoes the user's
/// original argument values. If any slot is unresolved, or the key has no
/// record, the `apiResponse` is an empty object.
pub struct RecommendationApiHandler {
    table: Arc<RecommendationTable>,
}

impl RecommendationApiHandler {
    pub fn new(table: Arc<RecommendationTable>) -> Self {
        Self { table }
    }

    fn recommend(&self, api: &ApiRequest) -> Result<Option<RecommendationEntity>> {
        let energy = resolve_entity(&api.slots, "energy")?;
        let size = resolve_entity(&api.slots, "size")?;
        let temperament = resolve_entity(&api.slots, "temperament")?;

        let (energy, size, temperament) = match (energy, size, temperament) {
            (Some(e), Some(s), Some(t)) => (e, s, t),
            _ => return Ok(None),
        };

        let key = composite_key(&energy, &size, &temperament);
        let record = match self.table.get(&key) {
            Some(r) => r,
            None => {
                tracing::warn!(key = %key, "No recommendation for resolved attributes");
                return Ok(None);
            }
        };

        tracing::debug!(key = %key, breed = %record.breed, "Recommendation found");

        Ok(Some(RecommendationEntity {
            name: record.breed.clone(),
            size: argument(api, "size")?,
            energy: argument(api, "energy")?,
            temperament: argument(api, "temperament")?,
        }))
    }
}

fn argument(api: &ApiRequest, name: &str) -> Result<serde_json::Value> {
    api.arguments
        .get(name)
        .cloned()
        .ok_or_else(|| SkillError::MissingArgument(name.to_string()))
}

#[async_trait]
impl RequestHandler for RecommendationApiHandler {
    fn can_handle(&self, envelope: &RequestEnvelope) -> bool {
        envelope.is_api_request(GET_RECOMMENDATION_API)
    }

    async fn handle(&self, envelope: &RequestEnvelope) -> Result<Response> {
        let entity = match envelope.api_request() {
            Some(api) => self.recommend(api)?,
            None => None,
        };

        match entity {
            Some(entity) => Response::api_entity(&entity),
            None => Ok(Response::empty_api()),
        }
    }

    fn name(&self) -> &str {
        "RecommendationApiHandler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ApiInvocationRequest, Request, Slot};
    use serde_json::json;

    fn handler() -> RecommendationApiHandler {
        RecommendationApiHandler::new(Arc::new(RecommendationTable::builtin().unwrap()))
    }

    fn request(energy: Slot, size: Slot, temperament: Slot) -> RequestEnvelope {
        let api = ApiRequest::new(GET_RECOMMENDATION_API)
            .with_argument("energy", "super active")
            .with_argument("size", "teeny")
            .with_argument("temperament", "sweet")
            .with_slot("energy", energy)
            .with_slot("size", size)
            .with_slot("temperament", temperament);
        RequestEnvelope::new(Request::ApiInvoked(ApiInvocationRequest {
            api_request: api,
            ..Default::default()
        }))
    }

    #[tokio::test]
    async fn test_all_resolved_returns_breed_with_original_arguments() {
        let envelope = request(
            Slot::matched("energy", "high", "HIGH"),
            Slot::matched("size", "small", "SMALL"),
            Slot::matched("temperament", "friendly", "FRIENDLY"),
        );
        let response = handler().handle(&envelope).await.unwrap();
        assert_eq!(
            response,
            Response::api(json!({
                "name": "Chihuahua",
                "size": "teeny",
                "energy": "super active",
                "temperament": "sweet"
            }))
        );
    }

    #[tokio::test]
    async fn test_any_unresolved_returns_empty() {
        let matched = [
            Slot::matched("energy", "high", "HIGH"),
            Slot::matched("size", "small", "SMALL"),
            Slot::matched("temperament", "friendly", "FRIENDLY"),
        ];
        for miss in 0..3 {
            let mut slots = matched.clone();
            slots[miss] = Slot::unmatched("x");
            let [e, s, t] = slots;
            let response = handler().handle(&request(e, s, t)).await.unwrap();
            assert_eq!(response, Response::empty_api(), "slot {} unresolved", miss);
        }
    }

    #[tokio::test]
    async fn test_unknown_key_returns_empty() {
        let envelope = request(
            Slot::matched("energy", "extreme", "EXTREME"),
            Slot::matched("size", "small", "SMALL"),
            Slot::matched("temperament", "friendly", "FRIENDLY"),
        );
        let response = handler().handle(&envelope).await.unwrap();
        assert_eq!(response, Response::empty_api());
    }

    #[tokio::test]
    async fn test_missing_argument_is_error() {
        let api = ApiRequest::new(GET_RECOMMENDATION_API)
            .with_slot("energy", Slot::matched("energy", "high", "HIGH"))
            .with_slot("size", Slot::matched("size", "small", "SMALL"))
            .with_slot("temperament", Slot::matched("temperament", "friendly", "FRIENDLY"));
        let envelope = RequestEnvelope::new(Request::ApiInvoked(ApiInvocationRequest {
            api_request: api,
            ..Default::default()
        }));

        let err = handler().handle(&envelope).await.unwrap_err();
        assert!(matches!(err, SkillError::MissingArgument(ref name) if name == "size"));
    }

    #[tokio::test]
    async fn test_missing_slot_is_error() {
        let api = ApiRequest::new(GET_RECOMMENDATION_API);
        let envelope = RequestEnvelope::new(Request::ApiInvoked(ApiInvocationRequest {
            api_request: api,
            ..Default::default()
        }));
        let err = handler().handle(&envelope).await.unwrap_err();
        assert!(matches!(err, SkillError::MalformedSlot { .. }));
    }
}
