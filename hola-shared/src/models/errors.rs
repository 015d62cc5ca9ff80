use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClaimsError {
    #[error("invalid token segments: {segments}")]
    InvalidTokenFormat { segments: usize },

    #[error("failed to decode the token payload: {0}")]
    DecodeError(#[from] base64::DecodeError),

    #[error("failed to parse the token payload: {0}")]
    ParseError(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("error marshalling response: {0}")]
    SerializationError(#[from] serde_json::Error),
}
