use thiserror::Error;

/// Failure reported by a document store backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    #[error("{0}")]
    Rejected(String),
}

/// A record could not be written
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Document store is not connected")]
    Unavailable,

    #[error("Failed to serialize record")]
    Serialize(#[from] bson::ser::Error),

    #[error("Failed to write record")]
    Store(#[from] StoreError),
}
