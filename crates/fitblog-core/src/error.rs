//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures raised before or after the store is reached.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid blog id: {0}")]
    InvalidId(String),

    #[error("Blog not found")]
    NotFound,

    #[error("No fields to update")]
    EmptyUpdate,
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Document could not be mapped: {0}")]
    Serialization(String),
}
