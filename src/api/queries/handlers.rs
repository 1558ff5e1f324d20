use crate::api::models::AppState;
use crate::storage::{Movie, RatedMovie};
use axum::Json;
use axum::extract::{Path, State};
use tracing::info;

pub async fn top_rated_handler(State(state): State<AppState>) -> Json<Vec<RatedMovie>> {
    let movies = state.catalog.read().await.top_rated();

    info!(count = movies.len(), "Top-rated query");

    Json(movies)
}

pub async fn movies_by_genre_handler(
    State(state): State<AppState>,
    Path(genre): Path<String>,
) -> Json<Vec<Movie>> {
    let movies = state.catalog.read().await.by_genre(&genre);

    info!(genre = %genre, count = movies.len(), "Genre query");

    Json(movies)
}

pub async fn movies_by_director_handler(
    State(state): State<AppState>,
    Path(director): Path<String>,
) -> Json<Vec<Movie>> {
    let movies = state.catalog.read().await.by_director(&director);

    info!(director = %director, count = movies.len(), "Director query");

    Json(movies)
}

pub async fn search_movies_handler(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> Json<Vec<Movie>> {
    let movies = state.catalog.read().await.search(&keyword);

    info!(keyword = %keyword, count = movies.len(), "Title search");

    Json(movies)
}
