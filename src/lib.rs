pub mod api;
pub mod config;
pub mod storage;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::api::{AppState, health_handler};

/// Build the application router with all routes wired to the given state
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::movies::routes())
        .merge(api::queries::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
