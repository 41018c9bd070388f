//! Shared types for the Photo Share session client.
//!
//! This crate provides:
//! - Token claims structure (`TokenClaims`)
//! - The claim decoder (`decode_claims`) - payload parsing without signature checks
//! - API response types (`AuthTokens`, `UserProfile`)

mod claims;
mod decode;
mod errors;
mod responses;

pub use claims::TokenClaims;
pub use decode::decode_claims;
pub use errors::DecodeError;
pub use responses::{AuthTokens, UserEnvelope, UserProfile};
