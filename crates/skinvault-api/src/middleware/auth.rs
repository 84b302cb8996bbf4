//! The two-stage authorization gate.
//!
//! Stage 1 ([`authorize`]) resolves the bearer token to a live user via
//! the store and attaches the identity to the request. Stage 2
//! ([`validate_token_claims`]) independently re-derives the token from
//! the same header and checks its signature and expiry against the
//! present instant, without consulting the store. Record endpoints use
//! stage 1 alone; the "who am I" endpoint stacks both.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;

use skinvault_core::error::{AppError, ErrorKind};

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Identity-resolution stage.
///
/// Answers "does a currently-live session exist for this token". A
/// cryptographically valid but superseded token is rejected here, since
/// the store only remembers the latest issued token per user.
pub async fn authorize(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())?;

    let user = state
        .auth_service
        .resolve_by_token(&token)
        .await
        .map_err(|e| match e.kind {
            ErrorKind::NotFound => AppError::unauthorized("This user does not exist"),
            _ => e,
        })?;

    request.extensions_mut().insert(AuthUser {
        id: user.id,
        login: user.login,
    });

    Ok(next.run(request).await)
}

/// Structural-validation stage.
///
/// Answers "is this specific token cryptographically and temporally valid
/// right now", independent of store state, so an expired token is
/// rejected the instant it crosses its expiry boundary even if the store
/// bookkeeping has not caught up. Attaches no context.
pub async fn validate_token_claims(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())?;

    state.jwt_decoder.verify(&token, Utc::now())?;

    Ok(next.run(request).await)
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AppError::unauthorized("Token is not provided"))?;

    let value = value
        .to_str()
        .map_err(|_| AppError::unauthorized("Invalid token format"))?;

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or_else(|| AppError::unauthorized("Invalid token format"))?;

    Ok(token.to_string())
}
