//! Route definitions for the SkinVault HTTP API.
//!
//! All routes are mounted under `/api/v1`. Registration and login are
//! public; skin routes pass through the identity-resolution stage; the
//! "who am I" route additionally passes the structural-validation stage.

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let authorize =
        axum_middleware::from_fn_with_state(state.clone(), middleware::auth::authorize);
    let validate_claims = axum_middleware::from_fn_with_state(
        state.clone(),
        middleware::auth::validate_token_claims,
    );

    let user_routes = Router::new()
        .route("/user/register", post(handlers::auth::register))
        .route("/user/login", post(handlers::auth::login))
        .route(
            "/user/me",
            // Layer ordering: the identity-resolution stage runs first,
            // then the structural-validation stage.
            get(handlers::auth::me)
                .layer(validate_claims)
                .layer(authorize.clone()),
        );

    let skin_routes = Router::new()
        .route("/skins/add", post(handlers::skin::add_skin))
        .route("/skins", get(handlers::skin::list_skins))
        .route("/skins/{id}", get(handlers::skin::get_skin))
        .route("/skins/{id}", delete(handlers::skin::delete_skin))
        .route_layer(authorize);

    let api_routes = Router::new()
        .route("/", get(handlers::health::health))
        .merge(user_routes)
        .merge(skin_routes);

    Router::new()
        // `nest` does not match the bare trailing-slash form of the
        // prefix, so the health route is also mounted explicitly.
        .route("/api/v1/", get(handlers::health::health))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}
