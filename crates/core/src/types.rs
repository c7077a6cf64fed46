/// All database primary keys are SQLite INTEGER (i64) rowids.
pub type DbId = i64;
