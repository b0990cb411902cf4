//! Image path resolution.
//!
//! Requested filenames are resolved inside a fixed image root. Absent images
//! degrade to the default asset; names that are not `.jpg` files or that
//! would escape the root are rejected.

mod error;
mod resolver;

pub use error::ImageError;
pub use resolver::ImageResolver;
