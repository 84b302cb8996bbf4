//! Session token validation.
//!
//! Verification is a pure function of (token, secret, now): no store or
//! ambient clock is consulted. Expiry is checked against the caller's
//! `now` so token-lifecycle behavior is deterministic and replayable.

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};

use skinvault_core::config::AuthConfig;

use super::claims::Claims;
use crate::error::TokenError;

/// Validates session tokens against the process-wide signing secret.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.set_required_spec_claims(&["exp"]);
        // Expiry is compared against the caller-supplied instant, not the
        // library's clock read.
        validation.validate_exp = false;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Verifies `token` at the instant `now` and returns its claims.
    ///
    /// Checks, in order:
    /// 1. The advertised signing algorithm belongs to the HMAC family
    /// 2. The signature verifies and the payload parses
    /// 3. Required claims are present and well formed
    /// 4. The expiry instant has not passed (`exp <= now` rejects)
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let header =
            decode_header(token).map_err(|e| TokenError::InvalidToken(e.to_string()))?;

        if !matches!(
            header.alg,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(TokenError::InvalidSigningMethod);
        }

        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                JwtErrorKind::MissingRequiredClaim(_) => TokenError::InvalidTokenClaims(
                    "'exp' claim is missing or not an integer".to_string(),
                ),
                JwtErrorKind::Json(_) => TokenError::InvalidTokenClaims(e.to_string()),
                _ => TokenError::InvalidToken(e.to_string()),
            })?;

        if token_data.claims.is_expired(now) {
            return Err(TokenError::TokenExpired);
        }

        Ok(token_data.claims)
    }
}
