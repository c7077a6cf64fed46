//! Handlers for the genre collection and item endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use filmoteka_core::error::CoreError;
use filmoteka_core::types::DbId;
use filmoteka_db::models::genre::{CreateGenre, UpdateGenre};
use filmoteka_db::repositories::{DeleteOutcome, GenreRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// GET /genre/
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(genres))
}

/// POST /genre/
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateGenre>,
) -> AppResult<impl IntoResponse> {
    let genre = GenreRepo::create(&state.pool, &input).await?;

    tracing::info!(genre_id = genre.id, name = %genre.name, "Genre created");

    Ok((StatusCode::CREATED, Json(genre)))
}

/// GET /genre/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Genre",
            id,
        }))?;

    Ok(Json(genre))
}

/// PUT /genre/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateGenre>,
) -> AppResult<impl IntoResponse> {
    GenreRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Genre",
            id,
        }))?;

    tracing::info!(genre_id = id, "Genre updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /genre/{id}
///
/// Rejected with 409 while any movie still references the genre.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    match GenreRepo::delete(&state.pool, id).await? {
        DeleteOutcome::Deleted => {
            tracing::info!(genre_id = id, "Genre deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        DeleteOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Genre",
            id,
        })),
        DeleteOutcome::Referenced(count) => Err(AppError::Core(CoreError::Conflict(format!(
            "Genre {id} is still referenced by {count} movie(s)"
        )))),
    }
}
