//! Skin handlers: add, list, get, delete.
//!
//! All routes are gated by the identity-resolution stage; the resolved
//! owner scopes every store access.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use skinvault_core::error::AppError;

use crate::dto::request::AddSkinRequest;
use crate::dto::response::{SkinResponse, StatusResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/v1/skins/add
pub async fn add_skin(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<AddSkinRequest>,
) -> Result<(StatusCode, Json<SkinResponse>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Missing or invalid fields: {e}")))?;

    let skin = state
        .skin_service
        .add_skin(&user.login, &req.name, &req.kind, &req.src)
        .await?;

    Ok((StatusCode::CREATED, Json(skin.into())))
}

/// GET /api/v1/skins
pub async fn list_skins(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<SkinResponse>>, ApiError> {
    let skins = state.skin_service.list_skins(&user.login).await?;

    Ok(Json(skins.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/skins/{id}
pub async fn get_skin(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<SkinResponse>, ApiError> {
    let id = parse_skin_id(&id)?;
    let skin = state.skin_service.get_skin(&user.login, id).await?;

    Ok(Json(skin.into()))
}

/// DELETE /api/v1/skins/{id}
pub async fn delete_skin(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    let id = parse_skin_id(&id)?;
    state.skin_service.delete_skin(&user.login, id).await?;

    Ok(Json(StatusResponse {
        status: "Success".to_string(),
    }))
}

/// Parses and bounds-checks a skin id path parameter.
fn parse_skin_id(raw: &str) -> Result<i32, AppError> {
    let id: i32 = raw
        .parse()
        .map_err(|_| AppError::validation("Invalid ID format"))?;

    if id < 1 {
        return Err(AppError::validation("ID must be greater than or equal to 1"));
    }

    Ok(id)
}
