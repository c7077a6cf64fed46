//! Repository for the `director` table.

use filmoteka_core::types::DbId;

use crate::models::director::{CreateDirector, Director, UpdateDirector};
use crate::repositories::DeleteOutcome;
use crate::DbPool;

/// Column list for director queries.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// List all directors, ordered by id ascending.
    pub async fn list(pool: &DbPool) -> Result<Vec<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM director ORDER BY id ASC");
        sqlx::query_as::<_, Director>(&query).fetch_all(pool).await
    }

    /// Find a director by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM director WHERE id = $1");
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new director, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateDirector) -> Result<Director, sqlx::Error> {
        let query = format!("INSERT INTO director (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Director>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Replace the name of a director. Returns the updated row, or `None`
    /// if no director with that id exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateDirector,
    ) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("UPDATE director SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a director unless a movie still references it.
    ///
    /// The reference count and the delete run in one transaction so a
    /// movie created between the two statements cannot be orphaned.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<DeleteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (refs,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM movie WHERE director_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
        if refs > 0 {
            return Ok(DeleteOutcome::Referenced(refs));
        }

        let result = sqlx::query("DELETE FROM director WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(if result.rows_affected() > 0 {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::NotFound
        })
    }
}
