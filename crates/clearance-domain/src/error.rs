//! Domain error types for entity validation.

use thiserror::Error;

/// Validation errors raised at construction or via setters.
///
/// These are never caught inside the crate; the caller decides whether to
/// abort or retry the in-progress operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Entity name is empty.
    #[error("{entity} name cannot be empty")]
    EmptyName { entity: &'static str },

    /// Access level is negative.
    #[error("access level cannot be negative: {value}")]
    NegativeAccessLevel { value: i64 },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
