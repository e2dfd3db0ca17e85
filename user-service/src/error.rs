// Service Errors
// Failures outside of plain lookups, which report absence through Option/bool

use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Record at position {0} is mutably borrowed")]
    RecordBorrowed(usize),
}
