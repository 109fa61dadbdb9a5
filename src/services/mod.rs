use thiserror::Error;

pub mod address;
pub mod donations;
pub mod favorites;
pub mod identity;
pub mod pix_keys;
pub mod products;
pub mod receivers;

/// Shared error type for the domain services. NotFound, Conflict and
/// Forbidden are deliberate domain outcomes; Sqlx covers everything
/// unexpected and is translated to a generic 500 at the API boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
