//! `AuthUser` extractor: the identity attached by the identity-resolution
//! stage of the authorization gate.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use skinvault_core::error::AppError;

use crate::error::ApiError;

/// The authenticated user resolved from the bearer token.
///
/// Inserted into request extensions by [`crate::middleware::auth::authorize`];
/// handlers receive it as an extractor. Extraction fails with an internal
/// error if the route was not gated.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User identifier.
    pub id: i32,
    /// Login name; used to scope all record access.
    pub login: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| {
                AppError::internal("Authenticated user missing from request extensions").into()
            })
    }
}
