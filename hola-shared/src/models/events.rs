use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Request context fields the handler cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestContext {
    pub request_id: String,
}

/// An HTTP-shaped invocation, independent of any particular gateway event type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InboundRequest {
    pub headers: HashMap<String, String>,
    pub body: String,
    pub request_context: RequestContext,
}

impl InboundRequest {
    pub fn new(headers: HashMap<String, String>, body: impl Into<String>, request_id: impl Into<String>) -> Self {
        InboundRequest {
            headers,
            body: body.into(),
            request_context: RequestContext { request_id: request_id.into() },
        }
    }

    pub fn request_id(&self) -> &str {
        &self.request_context.request_id
    }

    /// Looks a header up by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .or_else(|| {
                self.headers
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
                    .map(|(_, value)| value)
            })
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutboundResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}
