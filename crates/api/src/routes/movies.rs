//! Route definitions for the movie resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Routes for `/movies`.
///
/// The collection is registered with and without a trailing slash; clients
/// of the original service call it as `/movies/`.
///
/// A single GET handler serves both the plain listing and the filtered
/// listing (optional `director_id`/`genre_id` query parameters).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", get(movie::list).post(movie::create))
        .route("/movies/", get(movie::list).post(movie::create))
        .route(
            "/movies/{id}",
            get(movie::get_by_id)
                .put(movie::update)
                .delete(movie::delete),
        )
}
