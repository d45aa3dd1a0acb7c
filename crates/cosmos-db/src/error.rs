//! Database error types for cosmos-db.

use cosmos_core::validation::ValidationError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., a mission whose parent row is gone).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A field value was rejected before any SQL ran.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Underlying libSQL error, including foreign-key constraint violations.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
