use serde::{Deserialize, Serialize};

/// Token pair returned by successful login and register calls.
///
/// Always issued together; the store writes them as a pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// User profile returned by `GET /user/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// User id (the backend serializes it as `_id`)
    #[serde(rename = "_id")]
    pub id: String,

    pub username: String,

    pub email: String,

    /// URL of the uploaded avatar, if any
    pub profile_picture: Option<String>,

    /// Account creation time (ISO 8601 format)
    pub created_at: Option<String>,
}

/// Envelope the profile endpoint wraps its payload in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEnvelope {
    pub user: UserProfile,
}
