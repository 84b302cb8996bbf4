//! Session token creation.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use skinvault_core::config::AuthConfig;
use skinvault_core::error::AppError;

use super::claims::Claims;

/// Fixed validity window for every issued token, in days.
///
/// A design constant, not configuration: callers cannot request a
/// different lifetime per token.
pub const TOKEN_VALIDITY_DAYS: i64 = 14;

/// Creates signed session tokens bound to a subject and expiry instant.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").finish_non_exhaustive()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        }
    }

    /// Issues a token for `subject`, valid from `now` until
    /// `now + TOKEN_VALIDITY_DAYS`.
    pub fn issue(&self, subject: &str, now: DateTime<Utc>) -> Result<String, AppError> {
        let expires_at = now + Duration::days(TOKEN_VALIDITY_DAYS);

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}
