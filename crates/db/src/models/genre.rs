//! Genre model and request DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use filmoteka_core::types::DbId;

/// A row from the `genre` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new genre.
#[derive(Debug, Deserialize)]
pub struct CreateGenre {
    pub name: String,
}

/// DTO for a full-replace update (the id is immutable).
#[derive(Debug, Deserialize)]
pub struct UpdateGenre {
    pub name: String,
}
