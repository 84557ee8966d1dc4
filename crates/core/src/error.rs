use crate::types::DbId;

/// Domain-level error type shared by the store and API layers.
///
/// The API layer maps each variant to a distinct HTTP status, so keep the
/// variants aligned with the statuses the surface actually produces.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Server-side misconfiguration (e.g. missing JWT secret). Distinct
    /// from `Unauthorized` so bad credentials and a broken deployment are
    /// not conflated.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
