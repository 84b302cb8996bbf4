//! SkinVault server entry point: wires all crates together.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use skinvault_api::{AppState, build_router};
use skinvault_auth::jwt::{JwtDecoder, JwtEncoder};
use skinvault_auth::password::PasswordHasher;
use skinvault_core::config::AppConfig;
use skinvault_core::error::AppError;
use skinvault_database::DatabasePool;
use skinvault_database::migration::run_migrations;
use skinvault_database::repositories::{SkinRepository, UserRepository};
use skinvault_service::auth::AuthService;
use skinvault_service::skin::SkinService;

#[tokio::main]
async fn main() {
    let env = std::env::var("SKINVAULT_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging from configuration.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting SkinVault v{}", env!("CARGO_PKG_VERSION"));

    let db = DatabasePool::connect(&config.database).await?;
    run_migrations(db.pool()).await?;

    let user_repo = Arc::new(UserRepository::new(db.pool().clone()));
    let skin_repo = Arc::new(SkinRepository::new(db.pool().clone()));

    let auth_service = Arc::new(AuthService::new(
        user_repo,
        PasswordHasher::new(),
        JwtEncoder::new(&config.auth),
        JwtDecoder::new(&config.auth),
    ));
    let skin_service = Arc::new(SkinService::new(skin_repo));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    let state = AppState {
        auth_service,
        skin_service,
        jwt_decoder,
    };

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Listening on {addr}");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
