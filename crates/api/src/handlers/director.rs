//! Handlers for the director collection and item endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use filmoteka_core::error::CoreError;
use filmoteka_core::types::DbId;
use filmoteka_db::models::director::{CreateDirector, UpdateDirector};
use filmoteka_db::repositories::{DeleteOutcome, DirectorRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// GET /director/
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let directors = DirectorRepo::list(&state.pool).await?;
    Ok(Json(directors))
}

/// POST /director/
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateDirector>,
) -> AppResult<impl IntoResponse> {
    let director = DirectorRepo::create(&state.pool, &input).await?;

    tracing::info!(director_id = director.id, name = %director.name, "Director created");

    Ok((StatusCode::CREATED, Json(director)))
}

/// GET /director/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let director = DirectorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))?;

    Ok(Json(director))
}

/// PUT /director/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateDirector>,
) -> AppResult<impl IntoResponse> {
    DirectorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))?;

    tracing::info!(director_id = id, "Director updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /director/{id}
///
/// Rejected with 409 while any movie still references the director.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    match DirectorRepo::delete(&state.pool, id).await? {
        DeleteOutcome::Deleted => {
            tracing::info!(director_id = id, "Director deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        DeleteOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        })),
        DeleteOutcome::Referenced(count) => Err(AppError::Core(CoreError::Conflict(format!(
            "Director {id} is still referenced by {count} movie(s)"
        )))),
    }
}
