//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{auth, health, payments, residents, slots, stats, violations};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(resident_routes())
        .merge(slot_routes())
        .merge(payment_routes())
        .merge(violation_routes())
        .merge(stats_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// Resident routes
fn resident_routes() -> Router<AppState> {
    Router::new()
        .route("/residents", get(residents::list_residents))
        .route("/residents", post(residents::create_resident))
        .route("/residents/:id", get(residents::get_resident))
        .route("/residents/:id", patch(residents::update_resident))
        .route("/residents/:id", delete(residents::delete_resident))
}

/// Bicycle slot routes
fn slot_routes() -> Router<AppState> {
    Router::new()
        // Slot CRUD
        .route("/slots", get(slots::list_slots))
        .route("/slots", post(slots::create_slot))
        .route("/slots/available", get(slots::list_available_slots))
        .route("/slots/:id", get(slots::get_slot))
        .route("/slots/:id", patch(slots::update_slot))
        .route("/slots/:id", delete(slots::delete_slot))
        // Assignment workflow
        .route("/slots/:id/assign", post(slots::assign_slot))
        .route("/slots/:id/release", post(slots::release_slot))
        // Sticker history
        .route("/slots/:id/stickers", get(slots::get_slot_stickers))
}

/// Payment routes
fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/payments", get(payments::list_payments))
        .route("/payments", post(payments::create_payment))
        .route("/payments/generate", post(payments::generate_payments))
        .route("/payments/export", get(payments::export_payments))
        .route("/payments/:id/paid", post(payments::mark_paid))
        .route("/payments/:id/unpaid", post(payments::mark_unpaid))
}

/// Violation log routes
fn violation_routes() -> Router<AppState> {
    Router::new()
        .route("/violations", get(violations::list_violations))
        .route("/violations", post(violations::create_violation))
        .route("/violations/photo", post(violations::upload_photo))
        .route("/violations/:id", get(violations::get_violation))
        .route("/violations/:id", patch(violations::update_violation))
        .route("/violations/:id", delete(violations::delete_violation))
}

/// Statistics routes
fn stats_routes() -> Router<AppState> {
    Router::new().route("/stats/dashboard", get(stats::dashboard))
}
