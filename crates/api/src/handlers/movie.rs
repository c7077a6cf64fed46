//! Handlers for the movie collection and item endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use filmoteka_core::error::CoreError;
use filmoteka_core::types::DbId;
use filmoteka_db::models::movie::{CreateMovie, UpdateMovie};
use filmoteka_db::repositories::{DirectorRepo, GenreRepo, MovieRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Optional filter parameters for the movie collection.
#[derive(Debug, serde::Deserialize)]
pub struct ListMoviesParams {
    pub director_id: Option<DbId>,
    pub genre_id: Option<DbId>,
}

/// GET /movies/?director_id=&genre_id=
///
/// List all movies, optionally narrowed to one director and/or one genre.
/// When both filters are present the result is the intersection. A filter
/// id that does not resolve to an existing director/genre is a 404.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListMoviesParams>,
) -> AppResult<impl IntoResponse> {
    // Resolve filter ids up front so an unknown id is a 404 rather than a
    // silently empty result.
    if let Some(director_id) = params.director_id {
        DirectorRepo::find_by_id(&state.pool, director_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Director",
                id: director_id,
            }))?;
    }
    if let Some(genre_id) = params.genre_id {
        GenreRepo::find_by_id(&state.pool, genre_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Genre",
                id: genre_id,
            }))?;
    }

    let mut movies = MovieRepo::list(&state.pool).await?;
    if let Some(director_id) = params.director_id {
        movies.retain(|m| m.director_id == Some(director_id));
    }
    if let Some(genre_id) = params.genre_id {
        movies.retain(|m| m.genre_id == Some(genre_id));
    }

    Ok(Json(movies))
}

/// POST /movies/
///
/// Create a new movie. Returns the created record so callers learn the
/// generated id.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMovie>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::create(&state.pool, &input).await?;

    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;

    Ok(Json(movie))
}

/// PUT /movies/{id}
///
/// Full replace of every mutable field. The id in the path is
/// authoritative; an id in the body is ignored.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateMovie>,
) -> AppResult<impl IntoResponse> {
    MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;

    tracing::info!(movie_id = id, "Movie updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }));
    }

    tracing::info!(movie_id = id, "Movie deleted");

    Ok(StatusCode::NO_CONTENT)
}
