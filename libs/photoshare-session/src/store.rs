//! Token persistence surface.
//!
//! One store instance is constructed per process and shared by reference
//! with the validator and the flows. The entry names match the cookie names
//! the backend expects (`accessToken` / `refreshToken`).

use std::collections::HashMap;
use std::sync::RwLock;

use photoshare_types::AuthTokens;

/// Store entry name for the short-lived bearer token.
pub const ACCESS_TOKEN: &str = "accessToken";

/// Store entry name for the longer-lived refresh token.
pub const REFRESH_TOKEN: &str = "refreshToken";

/// Durable key/value surface holding the session token pair.
///
/// Login and register write the pair together, logout clears it together;
/// a store holding exactly one token is legal but degraded and the
/// validator still evaluates whichever token is present.
pub trait TokenStore: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&self, name: &str, value: &str);
    fn delete(&self, name: &str);

    /// Write access and refresh tokens as a pair.
    fn set_pair(&self, tokens: &AuthTokens) {
        self.set(ACCESS_TOKEN, &tokens.access_token);
        self.set(REFRESH_TOKEN, &tokens.refresh_token);
    }

    /// Delete access and refresh tokens as a pair.
    fn clear_pair(&self) {
        self.delete(ACCESS_TOKEN);
        self.delete(REFRESH_TOKEN);
    }
}

/// In-memory [`TokenStore`].
///
/// The browser-era client kept the pair in cookie storage; embedders with
/// durable storage implement the trait over their own persistence.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, name: &str) -> Option<String> {
        self.entries
            .read()
            .expect("token store lock poisoned")
            .get(name)
            .cloned()
    }

    fn set(&self, name: &str, value: &str) {
        self.entries
            .write()
            .expect("token store lock poisoned")
            .insert(name.to_string(), value.to_string());
    }

    fn delete(&self, name: &str) {
        self.entries
            .write()
            .expect("token store lock poisoned")
            .remove(name);
    }
}
