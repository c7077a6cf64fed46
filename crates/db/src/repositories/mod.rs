//! Repository layer: one struct of CRUD operations per table.

pub mod director_repo;
pub mod genre_repo;
pub mod movie_repo;

pub use director_repo::DirectorRepo;
pub use genre_repo::GenreRepo;
pub use movie_repo::MovieRepo;

/// Typed result of deleting a row that other rows may reference.
#[derive(Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The row existed and was deleted.
    Deleted,
    /// No row with that id exists.
    NotFound,
    /// The row is still referenced by this many movies; nothing was deleted.
    Referenced(i64),
}
