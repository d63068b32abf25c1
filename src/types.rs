//! Request envelope types for the petmatch skill
//!
//! All types use camelCase JSON serialization for wire compatibility
//! with the voice platform's request format.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Request type tag for intent requests
pub const INTENT_REQUEST: &str = "IntentRequest";

/// Request type tag for API invocations
pub const API_INVOKED: &str = "Dialog.API.Invoked";

/// Request type tag for session-ended notifications
pub const SESSION_ENDED_REQUEST: &str = "SessionEndedRequest";

/// Envelope format version written by the host platform
pub const ENVELOPE_VERSION: &str = "1.0";

fn default_version() -> String {
    ENVELOPE_VERSION.to_string()
}

/// Inbound event delivered by the host platform
///
/// Besides the typed fields, a parsed envelope keeps the JSON it was read
/// from so diagnostics can show exactly what the platform sent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    /// Envelope format version
    pub version: String,

    /// The request body, discriminated by `type`
    pub request: Request,

    /// Top-level fields the skill does not model (`session`, `context`, ...)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,

    #[serde(skip)]
    raw: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct EnvelopeFields {
    #[serde(default = "default_version")]
    version: String,
    request: Request,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

impl<'de> Deserialize<'de> for RequestEnvelope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        let fields: EnvelopeFields =
            serde_json::from_value(raw.clone()).map_err(de::Error::custom)?;
        Ok(Self {
            version: fields.version,
            request: fields.request,
            extra: fields.extra,
            raw: Some(raw),
        })
    }
}

/// Request body, discriminated by its `type` field
///
/// Types the skill does not model are kept as `Unsupported` with their wire
/// type and full body, so they can still be routed and reported.
#[derive(Debug, Clone)]
pub enum Request {
    /// A conversational intent
    IntentRequest(IntentRequest),

    /// An out-of-band API invocation
    ApiInvoked(ApiInvocationRequest),

    /// Session lifecycle notification
    SessionEndedRequest(SessionEndedRequest),

    /// Any request type this skill does not model
    Unsupported(UnsupportedRequest),
}

/// A request of a type the skill has no model for
#[derive(Debug, Clone)]
pub struct UnsupportedRequest {
    /// The `type` tag as sent
    pub request_type: String,

    /// The full request object, `type` included
    pub body: serde_json::Map<String, serde_json::Value>,
}

impl UnsupportedRequest {
    pub fn new(request_type: impl Into<String>) -> Self {
        let request_type = request_type.into();
        let mut body = serde_json::Map::new();
        body.insert("type".to_string(), request_type.clone().into());
        Self { request_type, body }
    }
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum KnownRequest {
    IntentRequest(IntentRequest),
    #[serde(rename = "Dialog.API.Invoked")]
    ApiInvoked(ApiInvocationRequest),
    SessionEndedRequest(SessionEndedRequest),
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum KnownRequestRef<'a> {
    IntentRequest(&'a IntentRequest),
    #[serde(rename = "Dialog.API.Invoked")]
    ApiInvoked(&'a ApiInvocationRequest),
    SessionEndedRequest(&'a SessionEndedRequest),
}

impl<'de> Deserialize<'de> for Request {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let body = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        let request_type = body
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| de::Error::missing_field("type"))?
            .to_string();

        match request_type.as_str() {
            INTENT_REQUEST | API_INVOKED | SESSION_ENDED_REQUEST => {
                let known: KnownRequest = serde_json::from_value(serde_json::Value::Object(body))
                    .map_err(de::Error::custom)?;
                Ok(match known {
                    KnownRequest::IntentRequest(r) => Request::IntentRequest(r),
                    KnownRequest::ApiInvoked(r) => Request::ApiInvoked(r),
                    KnownRequest::SessionEndedRequest(r) => Request::SessionEndedRequest(r),
                })
            }
            _ => Ok(Request::Unsupported(UnsupportedRequest { request_type, body })),
        }
    }
}

impl Serialize for Request {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Request::IntentRequest(r) => KnownRequestRef::IntentRequest(r).serialize(serializer),
            Request::ApiInvoked(r) => KnownRequestRef::ApiInvoked(r).serialize(serializer),
            Request::SessionEndedRequest(r) => {
                KnownRequestRef::SessionEndedRequest(r).serialize(serializer)
            }
            Request::Unsupported(r) => r.body.serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    pub intent: Intent,
}

/// A named user request with its slot values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub name: String,

    #[serde(default)]
    pub slots: HashMap<String, Slot>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiInvocationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    pub api_request: ApiRequest,
}

/// Structured, non-conversational data request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    /// API name (e.g., "GetWeatherApi", "getRecommendation")
    pub name: String,

    /// Argument values exactly as the user supplied them
    #[serde(default)]
    pub arguments: serde_json::Map<String, serde_json::Value>,

    /// Slots carrying entity resolution results for the arguments
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEndedRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// Why the session ended (e.g., "USER_INITIATED", "ERROR")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Platform-supplied error details when `reason` is "ERROR"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

/// A named parameter of an intent or API request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    #[serde(default)]
    pub name: String,

    /// Raw spoken value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolutions: Option<Resolutions>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolutions {
    #[serde(default)]
    pub resolutions_per_authority: Vec<AuthorityResolution>,
}

/// Resolution result from a single entity authority
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorityResolution {
    #[serde(default)]
    pub authority: String,

    pub status: ResolutionStatus,

    /// Candidate canonical values, best match first
    #[serde(default)]
    pub values: Vec<ResolvedValueWrapper>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionStatus {
    pub code: StatusCode,
}

/// Entity resolution status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCode {
    #[serde(rename = "ER_SUCCESS_MATCH")]
    SuccessMatch,
    #[serde(rename = "ER_SUCCESS_NO_MATCH")]
    SuccessNoMatch,
    #[serde(rename = "ER_ERROR_TIMEOUT")]
    ErrorTimeout,
    #[serde(rename = "ER_ERROR_EXCEPTION")]
    ErrorException,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedValueWrapper {
    pub value: ResolvedValue,
}

/// A canonical value from the slot type's catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedValue {
    pub name: String,

    #[serde(default)]
    pub id: String,
}

impl RequestEnvelope {
    /// Wrap a request body in an envelope
    pub fn new(request: Request) -> Self {
        Self {
            version: default_version(),
            request,
            extra: serde_json::Map::new(),
            raw: None,
        }
    }

    /// JSON of the envelope as received, or of the typed fields when it
    /// was built in code
    pub fn raw_json(&self) -> serde_json::Result<String> {
        match &self.raw {
            Some(raw) => serde_json::to_string(raw),
            None => serde_json::to_string(self),
        }
    }

    /// Request type tag as it appears on the wire
    pub fn request_type(&self) -> &str {
        match &self.request {
            Request::IntentRequest(_) => INTENT_REQUEST,
            Request::ApiInvoked(_) => API_INVOKED,
            Request::SessionEndedRequest(_) => SESSION_ENDED_REQUEST,
            Request::Unsupported(r) => &r.request_type,
        }
    }

    /// The intent, if this is an intent request
    pub fn intent(&self) -> Option<&Intent> {
        match &self.request {
            Request::IntentRequest(req) => Some(&req.intent),
            _ => None,
        }
    }

    /// Intent name, if this is an intent request
    pub fn intent_name(&self) -> Option<&str> {
        self.intent().map(|i| i.name.as_str())
    }

    /// The API request, if this is an API invocation
    pub fn api_request(&self) -> Option<&ApiRequest> {
        match &self.request {
            Request::ApiInvoked(req) => Some(&req.api_request),
            _ => None,
        }
    }

    /// True when this is an API invocation with the given name
    pub fn is_api_request(&self, name: &str) -> bool {
        self.api_request().is_some_and(|api| api.name == name)
    }

    /// True when this is an intent request with the given intent name
    pub fn is_intent(&self, name: &str) -> bool {
        self.intent_name() == Some(name)
    }
}

impl Intent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl ApiRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add an argument value
    pub fn with_argument(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Add a slot under the given name
    pub fn with_slot(mut self, key: impl Into<String>, slot: Slot) -> Self {
        self.slots.insert(key.into(), slot);
        self
    }
}

impl Slot {
    /// Slot whose first authority resolved successfully to `(name, id)`
    pub fn matched(slot: impl Into<String>, name: impl Into<String>, id: impl Into<String>) -> Self {
        Self::with_status(
            slot,
            StatusCode::SuccessMatch,
            vec![ResolvedValue {
                name: name.into(),
                id: id.into(),
            }],
        )
    }

    /// Slot whose first authority reported no match
    pub fn unmatched(slot: impl Into<String>) -> Self {
        Self::with_status(slot, StatusCode::SuccessNoMatch, Vec::new())
    }

    /// Slot with a single authority carrying the given status and candidates
    pub fn with_status(slot: impl Into<String>, code: StatusCode, values: Vec<ResolvedValue>) -> Self {
        Self {
            name: slot.into(),
            value: values.first().map(|v| v.name.clone()),
            resolutions: Some(Resolutions {
                resolutions_per_authority: vec![AuthorityResolution {
                    authority: String::new(),
                    status: ResolutionStatus { code },
                    values: values
                        .into_iter()
                        .map(|value| ResolvedValueWrapper { value })
                        .collect(),
                }],
            }),
        }
    }
}
