pub mod models;
pub mod movies;
pub mod queries;

// Re-exports
pub use models::*;

// Health handler (simple, keep here)
use axum::{Json, extract::State};

pub async fn health_handler(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let total_movies = state.catalog.read().await.len();
    Json(models::HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        total_movies,
    })
}
