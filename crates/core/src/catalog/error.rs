//! Catalog error types.

use catalog_shared::AppError;
use thiserror::Error;

use crate::image::ImageError;
use crate::storage::StorageError;

/// Catalog operation errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The collection document could not be read or written.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The collection could not be serialized.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// The collection document exists but does not parse.
    #[error("corrupt collection document: {0}")]
    CorruptData(String),

    /// The request names an unusable image file.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A store task failed before it could report a result.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Create a storage unavailable error.
    #[must_use]
    pub fn storage_unavailable(msg: impl Into<String>) -> Self {
        Self::StorageUnavailable(msg.into())
    }

    /// Create an encoding error.
    #[must_use]
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Create a corrupt data error.
    #[must_use]
    pub fn corrupt_data(msg: impl Into<String>) -> Self {
        Self::CorruptData(msg.into())
    }

    /// Create an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<StorageError> for CatalogError {
    fn from(err: StorageError) -> Self {
        Self::StorageUnavailable(err.to_string())
    }
}

impl From<ImageError> for CatalogError {
    fn from(err: ImageError) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::StorageUnavailable(msg) => Self::Storage(msg),
            CatalogError::Encoding(msg) | CatalogError::CorruptData(msg) => Self::Encoding(msg),
            CatalogError::InvalidRequest(msg) => Self::Validation(msg),
            CatalogError::Internal(msg) => Self::Internal(msg),
        }
    }
}
