//! Shared domain types for the filmoteka catalog service.

pub mod error;
pub mod types;
