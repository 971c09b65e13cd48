use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Errors surfaced by the persistence layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No record matched the given identifier.
    #[error("record not found")]
    NotFound,
    /// A database constraint rejected the write.
    #[error("constraint violation: {0}")]
    Constraint(String),
    /// Any other database failure.
    #[error("database error: {0}")]
    Database(DieselError),
    /// The connection pool could not hand out a connection.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => Self::NotFound,
            DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::NotNullViolation
                | DatabaseErrorKind::CheckViolation,
                info,
            ) => Self::Constraint(info.message().to_string()),
            other => Self::Database(other),
        }
    }
}
