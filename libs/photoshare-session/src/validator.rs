//! Session validation.
//!
//! One synchronous pass per activation: read both tokens, decode whatever is
//! present, compare expiries against the clock. No retry, no background
//! refresh, no re-check while a page stays mounted - the next activation
//! constructs a fresh validator and recomputes.

use std::time::{SystemTime, UNIX_EPOCH};

use photoshare_types::decode_claims;
use tracing::warn;

use crate::store::{ACCESS_TOKEN, REFRESH_TOKEN, TokenStore};

/// Tri-state session verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Validation has not run yet; no navigation decision may be made
    Pending,
    /// At least one stored token decodes and has remaining lifetime
    Valid,
    /// No tokens, undecodable tokens, or both expired
    Invalid,
}

/// Flattened verdict as consumers observe it.
///
/// `pending == true` means `valid` is meaningless and held at `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStatus {
    pub pending: bool,
    pub valid: bool,
}

/// Validates the stored token pair against the clock.
///
/// The session is `Valid` if **either** token is still live: the access
/// token is short-lived and may have expired while the refresh token
/// (issued alongside it, longer TTL) has not. The refresh token is only
/// used to extend the verdict - no client-side refresh protocol exists.
pub struct SessionValidator<'a> {
    store: &'a dyn TokenStore,
    verdict: Verdict,
}

impl<'a> SessionValidator<'a> {
    /// A fresh validator starts `Pending` until [`evaluate`](Self::evaluate)
    /// runs.
    pub fn new(store: &'a dyn TokenStore) -> Self {
        Self {
            store,
            verdict: Verdict::Pending,
        }
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            pending: self.verdict == Verdict::Pending,
            valid: self.verdict == Verdict::Valid,
        }
    }

    /// Run the read/decode/compare pass against the current clock.
    pub fn evaluate(&mut self) -> Verdict {
        self.evaluate_at(epoch_seconds())
    }

    /// Run the pass against an explicit clock. Absence of a token is not an
    /// error, just "no value"; a decode failure makes that token
    /// non-authoritative (logged, never raised) rather than failing the
    /// whole validation.
    pub fn evaluate_at(&mut self, now: i64) -> Verdict {
        let access = self.store.get(ACCESS_TOKEN);
        let refresh = self.store.get(REFRESH_TOKEN);

        let live = token_is_live(ACCESS_TOKEN, access.as_deref(), now)
            || token_is_live(REFRESH_TOKEN, refresh.as_deref(), now);

        self.verdict = if live { Verdict::Valid } else { Verdict::Invalid };
        self.verdict
    }
}

fn token_is_live(name: &str, token: Option<&str>, now: i64) -> bool {
    let Some(token) = token else {
        return false;
    };

    match decode_claims(token) {
        Ok(claims) => claims.live_at(now),
        Err(err) => {
            warn!(token = name, error = %err, "token failed to decode, treating as non-authoritative");
            false
        }
    }
}

fn epoch_seconds() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
    use photoshare_types::TokenClaims;

    use super::*;
    use crate::store::MemoryTokenStore;

    const NOW: i64 = 1_735_689_600;

    fn make_token(exp: i64) -> String {
        let claims = TokenClaims {
            id: "user123".to_string(),
            exp,
            iat: None,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap()
    }

    #[test]
    fn test_starts_pending() {
        let store = MemoryTokenStore::new();
        let validator = SessionValidator::new(&store);

        assert_eq!(validator.verdict(), Verdict::Pending);
        assert_eq!(
            validator.status(),
            SessionStatus {
                pending: true,
                valid: false,
            }
        );
    }

    #[test]
    fn test_empty_store_is_invalid() {
        let store = MemoryTokenStore::new();
        let mut validator = SessionValidator::new(&store);

        assert_eq!(validator.evaluate_at(NOW), Verdict::Invalid);
        assert_eq!(
            validator.status(),
            SessionStatus {
                pending: false,
                valid: false,
            }
        );
    }

    #[test]
    fn test_expired_access_live_refresh_is_valid() {
        let store = MemoryTokenStore::new();
        store.set(ACCESS_TOKEN, &make_token(NOW - 10));
        store.set(REFRESH_TOKEN, &make_token(NOW + 3600));
        let mut validator = SessionValidator::new(&store);

        assert_eq!(validator.evaluate_at(NOW), Verdict::Valid);
    }

    #[test]
    fn test_both_expired_is_invalid() {
        let store = MemoryTokenStore::new();
        store.set(ACCESS_TOKEN, &make_token(NOW - 10));
        store.set(REFRESH_TOKEN, &make_token(NOW - 5));
        let mut validator = SessionValidator::new(&store);

        assert_eq!(validator.evaluate_at(NOW), Verdict::Invalid);
    }

    #[test]
    fn test_expiry_equal_to_now_is_not_live() {
        let store = MemoryTokenStore::new();
        store.set(ACCESS_TOKEN, &make_token(NOW));
        let mut validator = SessionValidator::new(&store);

        assert_eq!(validator.evaluate_at(NOW), Verdict::Invalid);
    }

    #[test]
    fn test_malformed_access_does_not_mask_live_refresh() {
        let store = MemoryTokenStore::new();
        store.set(ACCESS_TOKEN, "garbage");
        store.set(REFRESH_TOKEN, &make_token(NOW + 60));
        let mut validator = SessionValidator::new(&store);

        assert_eq!(validator.evaluate_at(NOW), Verdict::Valid);
    }

    #[test]
    fn test_both_malformed_is_invalid() {
        let store = MemoryTokenStore::new();
        store.set(ACCESS_TOKEN, "garbage");
        store.set(REFRESH_TOKEN, "also.not.real");
        let mut validator = SessionValidator::new(&store);

        assert_eq!(validator.evaluate_at(NOW), Verdict::Invalid);
    }

    #[test]
    fn test_single_live_token_is_valid() {
        // Degraded store: only the refresh token survived.
        let store = MemoryTokenStore::new();
        store.set(REFRESH_TOKEN, &make_token(NOW + 60));
        let mut validator = SessionValidator::new(&store);

        assert_eq!(validator.evaluate_at(NOW), Verdict::Valid);
    }

    #[test]
    fn test_reevaluation_picks_up_store_changes() {
        let store = MemoryTokenStore::new();
        store.set(ACCESS_TOKEN, &make_token(NOW + 60));
        let mut validator = SessionValidator::new(&store);
        assert_eq!(validator.evaluate_at(NOW), Verdict::Valid);

        store.clear_pair();

        assert_eq!(validator.evaluate_at(NOW), Verdict::Invalid);
    }
}
