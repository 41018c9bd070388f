use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use crate::{DecodeError, TokenClaims};

/// Decodes a token's payload segment into [`TokenClaims`].
///
/// # Security Note
/// This function does NOT verify the signature - signature verification is
/// the server's responsibility. The decoded claims are only trustworthy
/// enough for local expiry inspection and routing decisions; any
/// authorization decision belongs to the backend.
///
/// Expiry is deliberately not evaluated here either: the session validator
/// owns the expiry policy and compares `exp` against its own clock.
///
/// Fails with [`DecodeError`] when the string is not a well-formed token
/// (wrong segment count, undecodable payload, missing `exp` claim).
pub fn decode_claims(token: &str) -> Result<TokenClaims, DecodeError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;

    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(b"ignored"),
        &validation,
    )
    .map_err(|e| {
        use jsonwebtoken::errors::ErrorKind;
        let message = e.to_string();
        match e.into_kind() {
            ErrorKind::MissingRequiredClaim(claim) => DecodeError::MissingClaim(claim),
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => DecodeError::InvalidFormat(message),
            other => DecodeError::Library(other.into()),
        }
    })?;

    Ok(token_data.claims)
}
