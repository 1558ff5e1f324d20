use crate::api::models::AppState;
use crate::api::queries::handlers::{
    movies_by_director_handler, movies_by_genre_handler, search_movies_handler, top_rated_handler,
};
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/top-rated", get(top_rated_handler))
        .route("/movies/genre/{genre}", get(movies_by_genre_handler))
        .route("/movies/director/{director}", get(movies_by_director_handler))
        .route("/search/{keyword}", get(search_movies_handler))
}
