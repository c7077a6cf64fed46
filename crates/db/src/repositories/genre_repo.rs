//! Repository for the `genre` table.

use filmoteka_core::types::DbId;

use crate::models::genre::{CreateGenre, Genre, UpdateGenre};
use crate::repositories::DeleteOutcome;
use crate::DbPool;

/// Column list for genre queries.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// List all genres, ordered by id ascending.
    pub async fn list(pool: &DbPool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genre ORDER BY id ASC");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }

    /// Find a genre by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genre WHERE id = $1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new genre, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateGenre) -> Result<Genre, sqlx::Error> {
        let query = format!("INSERT INTO genre (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Genre>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Replace the name of a genre. Returns the updated row, or `None` if
    /// no genre with that id exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateGenre,
    ) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("UPDATE genre SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a genre unless a movie still references it.
    ///
    /// Same transactional shape as [`DirectorRepo::delete`]: count
    /// references and delete atomically.
    ///
    /// [`DirectorRepo::delete`]: crate::repositories::DirectorRepo::delete
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<DeleteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (refs,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movie WHERE genre_id = $1")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        if refs > 0 {
            return Ok(DeleteOutcome::Referenced(refs));
        }

        let result = sqlx::query("DELETE FROM genre WHERE id = $1")
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
