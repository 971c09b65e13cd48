use thiserror::Error;

use crate::repository::RepositoryError;
use crate::uploads::RandomSourceError;

pub mod images;
pub mod products;

/// Errors surfaced by the application services, mapped to HTTP statuses
/// at the route layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested entity does not exist.
    #[error("not found")]
    NotFound,
    /// The request payload violated a constraint.
    #[error("{0}")]
    Validation(String),
    /// No uploaded file could be stored.
    #[error("upload failed: {0}")]
    Upload(String),
    /// The filesystem rejected a move or unlink.
    #[error("storage failure: {0}")]
    Storage(String),
    /// The record could not be removed after storage was already updated.
    #[error("could not delete record: {0}")]
    Deletion(String),
    /// The random byte source failed.
    #[error(transparent)]
    Random(#[from] RandomSourceError),
    /// Any other persistence failure.
    #[error(transparent)]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::Constraint(message) => Self::Validation(message),
            other => Self::Repository(other),
        }
    }
}
