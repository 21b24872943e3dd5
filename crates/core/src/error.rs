use crate::types::DbId;

/// Domain-level error taxonomy shared by every layer above storage.
///
/// `Conflict` is internal-only in practice: the one producer (a duplicate
/// like insert losing a race) is absorbed by the repository layer and never
/// reaches a caller.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
