use crate::api::models::AppState;
use crate::api::movies::handlers::{
    add_movie_handler, average_rating_handler, delete_movie_handler, get_movie_handler,
    rate_movie_handler, update_movie_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/movies", post(add_movie_handler))
        .route(
            "/movies/{id}",
            get(get_movie_handler)
                .patch(update_movie_handler)
                .delete(delete_movie_handler),
        )
        .route(
            "/movies/{id}/rating",
            post(rate_movie_handler).get(average_rating_handler),
        )
}
