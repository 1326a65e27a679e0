use thiserror::Error;

/// Failure surface shared by every store port. The in-memory adapters only
/// ever produce `Backend`; a database-backed adapter would map its driver
/// errors into the same variant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(message: impl Into<String>) -> Self {
        StoreError::Backend(message.into())
    }
}
