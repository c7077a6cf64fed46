pub mod directors;
pub mod genres;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree (mounted at the root).
///
/// ```text
/// /movies/            list (optional director_id/genre_id filter), create
/// /movies/{id}        get, update, delete
/// /director/          list, create
/// /director/{id}      get, update, delete
/// /genre/             list, create
/// /genre/{id}         get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(movies::router())
        .merge(directors::router())
        .merge(genres::router())
}
