use crate::api::models::*;
use crate::storage::{Movie, MovieUpdate, NewMovie};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

pub async fn add_movie_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewMovie>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::MalformedBody(e.body_text()))?;

    info!(id = %request.id, title = %request.title, "Adding movie");

    state.catalog.write().await.add(request)?;

    Ok(Json(MessageResponse {
        message: "Movie added successfully".to_string(),
    }))
}

pub async fn get_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, AppError> {
    let movie = state.catalog.read().await.get(&id).cloned()?;

    Ok(Json(movie))
}

pub async fn update_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<MovieUpdate>, JsonRejection>,
) -> Result<Json<MovieResponse>, AppError> {
    let Json(update) = payload.map_err(|e| AppError::MalformedBody(e.body_text()))?;

    info!(id = %id, "Updating movie");

    let movie = state.catalog.write().await.update(&id, update)?;

    Ok(Json(MovieResponse {
        message: "Movie updated successfully".to_string(),
        movie,
    }))
}

pub async fn delete_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    info!(id = %id, "Removing movie");

    state.catalog.write().await.delete(&id)?;

    Ok(Json(MessageResponse {
        message: "Movie removed successfully".to_string(),
    }))
}

pub async fn rate_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<RateMovieRequest>, JsonRejection>,
) -> Result<Json<MovieResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::MalformedBody(e.body_text()))?;

    info!(id = %id, rating = request.rating, "Rating movie");

    let movie = state.catalog.write().await.rate(&id, request.rating)?;

    Ok(Json(MovieResponse {
        message: "Rating added successfully".to_string(),
        movie,
    }))
}

pub async fn average_rating_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RatingResponse>, AppError> {
    let rating = state.catalog.read().await.average_rating(&id)?;

    Ok(Json(RatingResponse { rating }))
}
