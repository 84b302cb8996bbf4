//! Health check handler.

use axum::Json;

use crate::dto::response::HealthResponse;

/// GET /api/v1/
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
