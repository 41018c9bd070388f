use thiserror::Error;

/// Token decoding errors.
///
/// A decode failure never means "log the user out" by itself - the session
/// validator treats the affected token as non-authoritative and keeps
/// evaluating whatever else is in the store.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Invalid token format: {0}")]
    InvalidFormat(String),

    #[error("Missing required claim: {0}")]
    MissingClaim(String),

    #[error("JWT library error: {0}")]
    Library(#[from] jsonwebtoken::errors::Error),
}
