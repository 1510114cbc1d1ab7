//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes
//! - Error responses
//! - Response types

pub mod routes;

use axum::Router;
use feeburn_core::finance::FinanceEngine;
use feeburn_core::notify::ChangeNotifier;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Derivation engine with the configured policy.
    pub engine: FinanceEngine,
    /// Fan-out for project record changes.
    pub notifier: ChangeNotifier,
}

impl AppState {
    /// Creates the state around an engine and a change notifier.
    #[must_use]
    pub fn new(engine: FinanceEngine, notifier: ChangeNotifier) -> Self {
        Self { engine, notifier }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
