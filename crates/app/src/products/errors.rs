//! Product Errors

use sqlx::error::{DatabaseError, ErrorKind};
use thiserror::Error;

/// Errors raised by the products repository.
#[derive(Debug, Error)]
pub enum ProductsRepositoryError {
    /// A product with the same identity already exists.
    #[error("product already exists")]
    AlreadyExists,

    /// A referenced resource does not exist.
    #[error("related resource not found")]
    InvalidReference,

    /// A required column was missing.
    #[error("missing required data")]
    MissingRequiredData,

    /// The store rejected the row contents.
    #[error("invalid data")]
    InvalidData,

    /// Any other storage failure.
    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl From<sqlx::Error> for ProductsRepositoryError {
    fn from(error: sqlx::Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

/// Errors raised by the products service.
///
/// Not-found is not an error at the service layer; the operations return
/// `Option::None` for a missing identity instead.
#[derive(Debug, Error)]
pub enum ProductsServiceError {
    /// A product with the same identity already exists.
    #[error("product already exists")]
    AlreadyExists,

    /// A referenced resource does not exist.
    #[error("related resource not found")]
    InvalidReference,

    /// A required column was missing.
    #[error("missing required data")]
    MissingRequiredData,

    /// The store rejected the row contents.
    #[error("invalid data")]
    InvalidData,

    /// Any other storage failure.
    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl From<ProductsRepositoryError> for ProductsServiceError {
    fn from(error: ProductsRepositoryError) -> Self {
        match error {
            ProductsRepositoryError::AlreadyExists => Self::AlreadyExists,
            ProductsRepositoryError::InvalidReference => Self::InvalidReference,
            ProductsRepositoryError::MissingRequiredData => Self::MissingRequiredData,
            ProductsRepositoryError::InvalidData => Self::InvalidData,
            ProductsRepositoryError::Sql(source) => Self::Sql(source),
        }
    }
}
