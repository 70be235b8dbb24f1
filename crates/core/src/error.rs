//! Domain error taxonomy shared by the persistence and HTTP layers.
//!
//! Roadmap generation has its own error type,
//! [`GenerationError`](crate::generation::GenerationError), because its
//! failure modes (missing input, unparseable model output, structural
//! violations) carry different information and status codes.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No record matched. Owner-scoped mutations report a record owned by
    /// somebody else the same way, so callers cannot probe for existence.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A field violated a length or format rule.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing, malformed, or expired credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated, but acting on behalf of someone else.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::NotFound`].
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        Self::NotFound { entity, id }
    }
}
