use photoshare_types::DecodeError;
use thiserror::Error;

/// Session engine errors.
///
/// Decode and network failures stop at the flow boundary: the route guard
/// only ever sees the tri-state verdict, never an error value.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Client-side validation rejected the submission before any network call
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The API answered with a non-success status
    #[error("Request rejected with status {status}")]
    Rejected { status: u16 },

    /// Transport-level failure (connect, timeout, body read)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A stored token could not be decoded where its claims were required
    #[error("Token error: {0}")]
    Token(#[from] DecodeError),

    /// An operation needed the token pair but the store does not hold it
    #[error("Tokens not found in store")]
    MissingTokens,

    /// The flow was cancelled after the exchange but before any store write
    #[error("Flow cancelled")]
    Cancelled,

    /// Client construction failed
    #[error("Configuration error: {0}")]
    Config(String),
}
