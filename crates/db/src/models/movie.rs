//! Movie model and request DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use filmoteka_core::types::DbId;

/// A row from the `movie` table.
///
/// `genre_id` and `director_id` are nullable references; a movie may exist
/// without either.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<f64>,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}

/// DTO for creating a new movie. The id is generated by the database.
#[derive(Debug, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<f64>,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}

/// DTO for a full-replace update. Every column except the immutable id is
/// overwritten; an `id` in the request body is ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateMovie {
    pub title: String,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<f64>,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}
