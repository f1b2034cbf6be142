//! Service layer orchestrating the reservation lifecycle.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

pub mod reservations;

/// Typed outcomes raised by the service layer. The routes map each variant
/// to an HTTP status explicitly instead of collapsing everything to 500.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or missing required field, bad enum value, bad identifier.
    #[error("{0}")]
    Validation(String),

    /// No record for a given id or status query.
    #[error("{0}")]
    NotFound(String),

    /// Persistence-layer failure.
    #[error("{0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound("Reserva no encontrada".into()),
            RepositoryError::ValidationError(msg) => ServiceError::Validation(msg),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
