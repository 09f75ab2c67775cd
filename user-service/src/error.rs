use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors produced by the remote loader. Local store mutations are pure
/// in-memory operations and cannot fail.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}
