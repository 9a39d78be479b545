//! Domain-level error type.
//!
//! `CoreError` carries the semantic outcome of a domain operation; the API
//! layer maps each variant onto an HTTP status and JSON error envelope.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The referenced entity (unit, fee, reservation, ...) does not exist.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed a domain rule (bad slot, negative amount, unknown status).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The operation collides with existing state, e.g. an overlapping
    /// reservation or a duplicate billing period.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
