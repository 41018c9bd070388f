//! Session engine for the Photo Share client.
//!
//! Decides, on every page activation and after every credential action,
//! whether the current visitor holds a usable session, and gates navigation
//! accordingly.
//!
//! - **Token store** - injected `get`/`set`/`delete` surface holding the
//!   access/refresh token pair
//! - **Session validator** - one synchronous read/decode/compare pass
//!   producing a tri-state verdict
//! - **Route guard** - pure mapping from (verdict, page requirement) to a
//!   navigation decision
//! - **Credential flows** - login, register, logout against the backend API,
//!   plus the authenticated profile fetch
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use photoshare_session::{MemoryTokenStore, SessionClient, SessionConfig, SessionValidator};
//!
//! let store = Arc::new(MemoryTokenStore::new());
//! let client = SessionClient::new(
//!     SessionConfig { base_url: "https://api.photoshare.example".into() },
//!     store.clone(),
//! )?;
//!
//! let mut validator = SessionValidator::new(store.as_ref());
//! let verdict = validator.evaluate();
//! ```

mod client;
mod error;
mod guard;
mod store;
mod validator;

pub use client::{Avatar, FlowSuccess, Registration, SessionClient, SessionConfig};
pub use error::SessionError;
pub use guard::{PageAccess, Route, redirect_for};
pub use store::{ACCESS_TOKEN, MemoryTokenStore, REFRESH_TOKEN, TokenStore};
pub use validator::{SessionStatus, SessionValidator, Verdict};

// Re-export shared types for convenience
pub use photoshare_types::{AuthTokens, DecodeError, TokenClaims, UserProfile, decode_claims};
