//! Credential flows against the Photo Share backend.

use std::sync::Arc;
use std::time::Duration;

use photoshare_types::{AuthTokens, UserEnvelope, UserProfile, decode_claims};
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::error::SessionError;
use crate::guard::Route;
use crate::store::{ACCESS_TOKEN, REFRESH_TOKEN, TokenStore};

/// Connect timeout (TCP handshake + TLS).
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Total request/response timeout for credential calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the session client.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Base URL of the backend API (e.g., "https://api.photoshare.example")
    pub base_url: String,
}

impl SessionConfig {
    /// Read the base URL from the `PHOTOSHARE_API_URL` environment variable.
    pub fn from_env() -> Result<Self, SessionError> {
        let base_url = std::env::var("PHOTOSHARE_API_URL")
            .map_err(|_| SessionError::Config("PHOTOSHARE_API_URL must be set".into()))?;
        Ok(Self { base_url })
    }
}

/// Settled outcome of a successful credential flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowSuccess {
    /// User-facing notification text
    pub notice: &'static str,
    /// Navigation target requested by the flow
    pub navigate_to: Route,
}

/// Registration submission. The avatar is optional; the three text fields
/// are required and validated before any network call.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub avatar: Option<Avatar>,
}

/// Avatar image attached to a registration.
#[derive(Debug, Clone)]
pub struct Avatar {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Client for the credential flows (login, register, logout) and the
/// authenticated profile fetch.
///
/// Each flow is one request/response exchange with no internal retry; a new
/// call is a fresh one-shot instance. Every flow takes a cancellation token
/// that is checked after the exchange and before any store write, so an
/// abandoned flow cannot mutate a store nobody is watching anymore.
pub struct SessionClient {
    base_url: String,
    http: reqwest::Client,
    store: Arc<dyn TokenStore>,
}

impl SessionClient {
    /// Create a new session client sharing the injected token store.
    pub fn new(config: SessionConfig, store: Arc<dyn TokenStore>) -> Result<Self, SessionError> {
        if config.base_url.is_empty() {
            return Err(SessionError::Config("base_url is required".into()));
        }

        // Cookie jar enabled so the logout credential rides implicitly.
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .cookie_store(true)
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
            store,
        })
    }

    /// Log in with a username or email plus password.
    ///
    /// Both the `username` and `email` fields of the request carry the same
    /// input; the server disambiguates. On HTTP 200 the returned token pair
    /// is written to the store and navigation to the profile page is
    /// requested. On any failure the store is left untouched.
    pub async fn login(
        &self,
        username_or_email: &str,
        password: &str,
        cancel: &CancellationToken,
    ) -> Result<FlowSuccess, SessionError> {
        if username_or_email.trim().is_empty() {
            return Err(SessionError::Validation(
                "Username or Email is required".into(),
            ));
        }
        if password.is_empty() {
            return Err(SessionError::Validation("Password is required".into()));
        }

        debug!("submitting login");

        let response = self
            .http
            .post(format!("{}/login", self.base_url))
            .json(&LoginRequest {
                username: username_or_email,
                email: username_or_email,
                password,
            })
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            error!(status = %response.status(), "login rejected");
            return Err(SessionError::Rejected {
                status: response.status().as_u16(),
            });
        }

        let tokens: AuthTokens = response.json().await?;
        self.settle_tokens(tokens, cancel)?;

        Ok(FlowSuccess {
            notice: "Login successful!",
            navigate_to: Route::UserProfile,
        })
    }

    /// Register a new account, optionally with an avatar image.
    ///
    /// HTTP 200 and 201 both settle the flow successfully, with the same
    /// token-write and navigation contract as [`login`](Self::login).
    pub async fn register(
        &self,
        registration: Registration,
        cancel: &CancellationToken,
    ) -> Result<FlowSuccess, SessionError> {
        if registration.username.trim().is_empty() {
            return Err(SessionError::Validation("Username is required".into()));
        }
        if registration.email.trim().is_empty() {
            return Err(SessionError::Validation("Email is required".into()));
        }
        if registration.password.is_empty() {
            return Err(SessionError::Validation("Password is required".into()));
        }

        let mut form = Form::new()
            .text("username", registration.username)
            .text("email", registration.email)
            .text("password", registration.password);

        if let Some(avatar) = registration.avatar {
            let part = Part::bytes(avatar.bytes)
                .file_name(avatar.file_name)
                .mime_str(&avatar.mime_type)?;
            form = form.part("file", part);
        }

        debug!("submitting registration");

        let response = self
            .http
            .post(format!("{}/register", self.base_url))
            .multipart(form)
            .send()
            .await?;

        if response.status() != StatusCode::OK && response.status() != StatusCode::CREATED {
            error!(status = %response.status(), "registration rejected");
            return Err(SessionError::Rejected {
                status: response.status().as_u16(),
            });
        }

        let tokens: AuthTokens = response.json().await?;
        self.settle_tokens(tokens, cancel)?;

        Ok(FlowSuccess {
            notice: "User Created Successfully",
            navigate_to: Route::UserProfile,
        })
    }

    /// Log out the current session.
    ///
    /// The request body is empty; the session credential is whatever the
    /// cookie jar attaches. On HTTP 200 both tokens are deleted and
    /// navigation back to the auth entry is requested. On failure the store
    /// and navigation are left unchanged - the server-side session may
    /// already be gone, but the client treats failure as "try again".
    pub async fn logout(&self, cancel: &CancellationToken) -> Result<FlowSuccess, SessionError> {
        debug!("submitting logout");

        let response = self
            .http
            .post(format!("{}/logout", self.base_url))
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            error!(status = %response.status(), "logout rejected");
            return Err(SessionError::Rejected {
                status: response.status().as_u16(),
            });
        }

        if cancel.is_cancelled() {
            return Err(SessionError::Cancelled);
        }
        self.store.clear_pair();

        Ok(FlowSuccess {
            notice: "Logged out",
            navigate_to: Route::Authorise,
        })
    }

    /// Fetch the profile of the user the stored access token belongs to.
    ///
    /// The subject id comes from the decoded access token; the refresh token
    /// travels in an `X-Refresh-Token` side-channel header. Requires both
    /// tokens to be present in the store.
    pub async fn fetch_profile(&self) -> Result<UserProfile, SessionError> {
        let access = self
            .store
            .get(ACCESS_TOKEN)
            .ok_or(SessionError::MissingTokens)?;
        let refresh = self
            .store
            .get(REFRESH_TOKEN)
            .ok_or(SessionError::MissingTokens)?;

        let claims = decode_claims(&access)?;

        let response = self
            .http
            .get(format!("{}/user/{}", self.base_url, claims.id))
            .bearer_auth(&access)
            .header("X-Refresh-Token", &refresh)
            .send()
            .await?;

        if !response.status().is_success() {
            error!(status = %response.status(), "profile fetch rejected");
            return Err(SessionError::Rejected {
                status: response.status().as_u16(),
            });
        }

        let envelope: UserEnvelope = response.json().await?;
        Ok(envelope.user)
    }

    /// Write the freshly issued pair, unless the flow was abandoned while
    /// the request was in flight.
    fn settle_tokens(
        &self,
        tokens: AuthTokens,
        cancel: &CancellationToken,
    ) -> Result<(), SessionError> {
        if cancel.is_cancelled() {
            return Err(SessionError::Cancelled);
        }
        self.store.set_pair(&tokens);
        Ok(())
    }
}
