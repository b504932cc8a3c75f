use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Email '{0}' is already registered")]
    DuplicateIdentity(String),

    #[error("Email or password wrong")]
    CredentialsRejected,

    #[error("Position {position} is out of range for {len} tasks")]
    OutOfRange { position: usize, len: usize },

    #[error("Stored data under '{key}' is unreadable: {detail}")]
    Corrupted { key: String, detail: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

impl<T> From<std::sync::PoisonError<T>> for StoreError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        Self::Storage(err.to_string())
    }
}
