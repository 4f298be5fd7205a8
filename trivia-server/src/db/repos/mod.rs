//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Lists are ordered by id so pagination is stable
//! - Deletes use RETURNING instead of check-then-delete
//! - Constraint violations surface as sqlx errors for the HTTP layer to map

pub mod categories;
pub mod questions;

pub use categories::CategoryRepo;
pub use questions::QuestionRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("constraint violated: {0}")]
    Constraint(String),
}

impl DbError {
    pub(crate) fn question_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "question",
            id: id.to_string(),
        }
    }
}
