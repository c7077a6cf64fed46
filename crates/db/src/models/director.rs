//! Director model and request DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use filmoteka_core::types::DbId;

/// A row from the `director` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Director {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new director.
#[derive(Debug, Deserialize)]
pub struct CreateDirector {
    pub name: String,
}

/// DTO for a full-replace update (the id is immutable).
#[derive(Debug, Deserialize)]
pub struct UpdateDirector {
    pub name: String,
}
