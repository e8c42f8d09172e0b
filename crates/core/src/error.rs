//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is local and recoverable: the caller reports it and carries on
/// with the previous state intact.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed numeric text).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A field constraint was violated (e.g. a non-positive price).
    #[error("constraint violated: {0}")]
    ConstraintViolation(String),

    /// A requested item was not found.
    #[error("not found")]
    NotFound,

    /// The store is at its configured capacity.
    #[error("capacity exceeded (limit: {capacity})")]
    CapacityExceeded { capacity: usize },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::ConstraintViolation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn capacity_exceeded(capacity: usize) -> Self {
        Self::CapacityExceeded { capacity }
    }
}
