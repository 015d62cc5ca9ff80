use serde::{Deserialize, Serialize};

/// Payload of an unverified bearer token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Claims {
    pub token: String, // Bearer value with the scheme stripped
    pub sub: String,   // Subject from the middle segment
}
