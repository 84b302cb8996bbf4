//! Token validation error taxonomy.

use thiserror::Error;

use skinvault_core::error::AppError;

/// The ways a presented token can fail structural validation.
///
/// Each variant maps to a distinct rejection reason at the API boundary;
/// the refresh-on-login flow additionally branches on `TokenExpired`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token header advertises a non-HMAC signing algorithm.
    #[error("Unexpected signing method")]
    InvalidSigningMethod,
    /// The token is malformed or its signature does not verify.
    #[error("Invalid token: {0}")]
    InvalidToken(String),
    /// A required claim is absent or has the wrong shape.
    #[error("Invalid token claims: {0}")]
    InvalidTokenClaims(String),
    /// The token's expiry instant has passed.
    #[error("Token has expired")]
    TokenExpired,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InvalidSigningMethod
            | TokenError::InvalidToken(_)
            | TokenError::InvalidTokenClaims(_) => AppError::validation(err.to_string()),
            TokenError::TokenExpired => AppError::unauthorized(err.to_string()),
        }
    }
}
