use crate::types::DbId;
use crate::validation::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed schema checks. Carries every failing field, not just the first.
    #[error("Invalid {entity} data: {errors}")]
    InvalidFields {
        entity: &'static str,
        errors: FieldErrors,
    },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
