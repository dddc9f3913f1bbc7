//! Onboard navigation computer: estimates the Millennium Falcon's odds of
//! reaching its destination before the Empire's countdown expires, while
//! evading the bounty hunters the Empire has posted along the way.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod services;

use crate::services::AppState;

/// Builds the HTTP router over shared state.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/millennium-falcon",
            post(handlers::navigation::load_millennium_falcon),
        )
        .route("/api/empire", post(handlers::navigation::load_empire))
        .route("/api/odds", get(handlers::navigation::get_odds))
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
