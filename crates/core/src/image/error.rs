//! Image resolution error types.

use thiserror::Error;

/// Image resolution errors.
#[derive(Debug, Error)]
pub enum ImageError {
    /// Requested path does not end with the image extension.
    #[error("image path does not end with .jpg: {filename}")]
    InvalidExtension {
        /// The rejected filename.
        filename: String,
    },

    /// Requested path resolves outside the image root.
    #[error("image path escapes the image directory: {filename}")]
    OutsideRoot {
        /// The rejected filename.
        filename: String,
    },

    /// The image root directory cannot be accessed.
    #[error("image directory unavailable: {0}")]
    RootUnavailable(#[from] std::io::Error),
}

impl ImageError {
    /// Create an invalid extension error.
    #[must_use]
    pub fn invalid_extension(filename: impl Into<String>) -> Self {
        Self::InvalidExtension {
            filename: filename.into(),
        }
    }

    /// Create an outside root error.
    #[must_use]
    pub fn outside_root(filename: impl Into<String>) -> Self {
        Self::OutsideRoot {
            filename: filename.into(),
        }
    }
}
