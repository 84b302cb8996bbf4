//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use skinvault_auth::jwt::JwtDecoder;
use skinvault_service::auth::AuthService;
use skinvault_service::skin::SkinService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Registration, login, and identity resolution.
    pub auth_service: Arc<AuthService>,
    /// Owner-scoped skin CRUD.
    pub skin_service: Arc<SkinService>,
    /// Structural token validation for the claims-validation stage.
    pub jwt_decoder: Arc<JwtDecoder>,
}
