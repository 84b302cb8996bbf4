//! Auth handlers: register, login, me.

use axum::Json;
use axum::extract::State;
use chrono::Utc;
use validator::Validate;

use skinvault_core::error::AppError;

use crate::dto::request::CredentialsRequest;
use crate::dto::response::{MessageResponse, TokenResponse, UserInfoResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/v1/user/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Missing or invalid fields: {e}")))?;

    state
        .auth_service
        .register(&req.login, &req.password, Utc::now())
        .await?;

    Ok(Json(MessageResponse {
        message: "Success".to_string(),
    }))
}

/// POST /api/v1/user/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Missing or invalid fields: {e}")))?;

    let token = state
        .auth_service
        .login(&req.login, &req.password, Utc::now())
        .await?;

    Ok(Json(TokenResponse { token }))
}

/// GET /api/v1/user/me
///
/// Gated by both authorization stages; the identity comes from the
/// extension attached by the identity-resolution stage.
pub async fn me(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<UserInfoResponse>, ApiError> {
    let skins = state.skin_service.list_skins(&user.login).await?;

    Ok(Json(UserInfoResponse {
        login: user.login,
        skins: skins.into_iter().map(Into::into).collect(),
    }))
}
