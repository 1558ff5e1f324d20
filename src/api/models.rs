use crate::storage::{CatalogError, Movie, MovieCatalog};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RwLock<MovieCatalog>>,
}

impl AppState {
    /// Fresh state with an empty catalog
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(RwLock::new(MovieCatalog::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Request to submit a rating for a movie
#[derive(Debug, Deserialize)]
pub struct RateMovieRequest {
    pub rating: i64,
}

/// Response carrying only a confirmation message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response carrying a confirmation message plus the affected movie
#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub message: String,
    pub movie: Movie,
}

/// Average rating for a single movie
#[derive(Debug, Serialize)]
pub struct RatingResponse {
    pub rating: f64,
}

/// Health check response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub total_movies: usize,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    DuplicateId(String),
    NotFound(String),
    InvalidRating(String),
    MalformedBody(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        let message = err.to_string();
        match err {
            CatalogError::DuplicateId(_) => AppError::DuplicateId(message),
            CatalogError::NotFound(_) => AppError::NotFound(message),
            CatalogError::InvalidRating(_) => AppError::InvalidRating(message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::DuplicateId(msg) => (StatusCode::BAD_REQUEST, "DuplicateId", msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NotFound", msg),
            AppError::InvalidRating(msg) => (StatusCode::BAD_REQUEST, "InvalidRating", msg),
            AppError::MalformedBody(msg) => (StatusCode::BAD_REQUEST, "MalformedRequestBody", msg),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
        });

        (status, body).into_response()
    }
}
