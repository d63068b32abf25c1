//! Outbound response shapes and the builder handlers use to produce them

use serde::{Deserialize, Serialize};

/// A skill response: spoken output, an API result, or an empty acknowledgement
///
/// Exactly one shape per invocation, determined by the handler that matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    /// Structured API invocation result
    Api {
        #[serde(rename = "apiResponse")]
        api_response: serde_json::Value,
    },

    /// Conversational reply
    Speech {
        speech: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reprompt: Option<String>,
    },

    /// Empty acknowledgement
    Empty {},
}

impl Response {
    /// Wrap a structured API result
    pub fn api(api_response: serde_json::Value) -> Self {
        Response::Api { api_response }
    }

    /// API result with an empty object body
    pub fn empty_api() -> Self {
        Response::api(serde_json::Value::Object(serde_json::Map::new()))
    }

    /// Serialize a typed entity into an API result
    pub fn api_entity<T: Serialize>(entity: &T) -> crate::Result<Self> {
        Ok(Response::api(serde_json::to_value(entity)?))
    }

    /// Spoken text, if this is a conversational response
    pub fn speech(&self) -> Option<&str> {
        match self {
            Response::Speech { speech, .. } => Some(speech),
            _ => None,
        }
    }

    /// Reprompt text, if present
    pub fn reprompt(&self) -> Option<&str> {
        match self {
            Response::Speech { reprompt, .. } => reprompt.as_deref(),
            _ => None,
        }
    }

    /// API body, if this is an API result
    pub fn api_response(&self) -> Option<&serde_json::Value> {
        match self {
            Response::Api { api_response } => Some(api_response),
            _ => None,
        }
    }
}

/// Builder for conversational responses
///
/// A builder with no speech produces `Response::Empty`.
#[derive(Debug, Default)]
pub struct ResponseBuilder {
    speech: Option<String>,
    reprompt: Option<String>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spoken output
    pub fn speak(mut self, speech: impl Into<String>) -> Self {
        self.speech = Some(speech.into());
        self
    }

    /// Set the reprompt spoken if the user stays silent
    pub fn reprompt(mut self, reprompt: impl Into<String>) -> Self {
        self.reprompt = Some(reprompt.into());
        self
    }

    pub fn get_response(self) -> Response {
        match self.speech {
            Some(speech) => Response::Speech {
                speech,
                reprompt: self.reprompt,
            },
            None => Response::Empty {},
        }
    }
}
