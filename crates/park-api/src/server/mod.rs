//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use park_common::{AppConfig, AppError, JwtService};
use park_db::{
    create_pool, run_migrations, PgAssignmentRepository, PgPaymentRepository,
    PgResidentRepository, PgSlotRepository, PgStickerRepository, PgViolationRepository,
};
use park_service::ServiceContextBuilder;
use park_storage::LocalPhotoStorage;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config().clone();
    let is_production = config.app.env.is_production();

    // Uploads need headroom above the raw file limit for multipart framing
    let max_upload_bytes = config.storage.max_file_size_mb as usize * 1024 * 1024 + 64 * 1024;

    let api = apply_middleware_with_config(
        create_router().layer(DefaultBodyLimit::max(max_upload_bytes)),
        &config.rate_limit,
        &config.cors,
        is_production,
    );

    // Health probes skip the rate limiter
    let health = apply_middleware(health_routes());

    api.merge(health)
        // Stored violation photos are served as static files
        .nest_service(
            &config.storage.public_base_path,
            ServeDir::new(&config.storage.upload_dir),
        )
        .with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = park_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Apply pending migrations
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database migrations applied");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    // Create photo storage
    let photo_storage = Arc::new(LocalPhotoStorage::new(
        &config.storage.upload_dir,
        &config.storage.public_base_path,
        config.storage.max_file_size_mb as usize * 1024 * 1024,
    ));

    // Create repositories
    let resident_repo = Arc::new(PgResidentRepository::new(pool.clone()));
    let slot_repo = Arc::new(PgSlotRepository::new(pool.clone()));
    let sticker_repo = Arc::new(PgStickerRepository::new(pool.clone()));
    let assignment_repo = Arc::new(PgAssignmentRepository::new(pool.clone()));
    let payment_repo = Arc::new(PgPaymentRepository::new(pool.clone()));
    let violation_repo = Arc::new(PgViolationRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .resident_repo(resident_repo)
        .slot_repo(slot_repo)
        .sticker_repo(sticker_repo)
        .assignment_repo(assignment_repo)
        .payment_repo(payment_repo)
        .violation_repo(violation_repo)
        .photo_storage(photo_storage)
        .jwt_service(jwt_service)
        .staff(config.staff.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
