use serde::{Deserialize, Serialize};

/// Claims carried by the access and refresh tokens the backend issues.
///
/// The client never constructs or signs these; it only reads them out of
/// server-issued tokens for local expiry inspection and to learn the
/// subject's user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User id (subject) - used as the path parameter for profile lookups
    pub id: String,

    /// Token expiration (Unix timestamp, seconds)
    pub exp: i64,

    /// Token issued at (Unix timestamp, seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl TokenClaims {
    /// Whether the token is still live at `now` (strictly greater than).
    pub fn live_at(&self, now: i64) -> bool {
        self.exp > now
    }
}
