//! Filename digests for item images.

use sha2::{Digest, Sha256};

/// Extension of every stored image.
pub const IMAGE_EXTENSION: &str = ".jpg";

/// Derive the storage filename for a declared image name.
///
/// The digest covers the name string, not image bytes: two items declaring the
/// same image name share one stored filename.
#[must_use]
pub fn hash_image_name(image_name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(image_name.as_bytes());
    format!("{:x}{IMAGE_EXTENSION}", hasher.finalize())
}
