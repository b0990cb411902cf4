//! Image resolver implementation.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use super::error::ImageError;
use crate::catalog::IMAGE_EXTENSION;

/// Resolves requested image filenames to files under the image root.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    root: PathBuf,
    default_image: String,
}

impl ImageResolver {
    /// Create a resolver rooted at `root`, falling back to `default_image`.
    ///
    /// The root is canonicalized once so later containment checks compare
    /// canonical paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be canonicalized, or if the
    /// default image name is not a plain relative path or resolves outside
    /// the root.
    pub fn new(root: impl AsRef<Path>, default_image: impl Into<String>) -> Result<Self, ImageError> {
        let root = std::fs::canonicalize(root.as_ref())?;
        let default_image = default_image.into();
        if !is_contained(Path::new(&default_image)) {
            return Err(ImageError::outside_root(default_image));
        }
        if let Ok(canonical) = std::fs::canonicalize(root.join(&default_image))
            && !canonical.starts_with(&root)
        {
            return Err(ImageError::outside_root(default_image));
        }
        Ok(Self {
            root,
            default_image,
        })
    }

    /// Canonical image root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the default asset.
    #[must_use]
    pub fn default_path(&self) -> PathBuf {
        self.root.join(&self.default_image)
    }

    /// Resolve a requested filename to the path that should be served.
    ///
    /// A missing file is not an error: the default asset path is returned.
    ///
    /// # Errors
    ///
    /// Returns `InvalidExtension` for names not ending in `.jpg` and
    /// `OutsideRoot` for names that would leave the image root, including
    /// through symlinks.
    pub async fn resolve(&self, requested: &str) -> Result<PathBuf, ImageError> {
        let candidate = self.root.join(requested);

        if !candidate.to_string_lossy().ends_with(IMAGE_EXTENSION) {
            return Err(ImageError::invalid_extension(requested));
        }
        if !is_contained(Path::new(requested)) {
            return Err(ImageError::outside_root(requested));
        }

        let is_file = tokio::fs::metadata(&candidate)
            .await
            .is_ok_and(|meta| meta.is_file());
        if !is_file {
            debug!(path = %candidate.display(), "Image not found, serving default");
            return self.fallback().await;
        }

        let Ok(canonical) = tokio::fs::canonicalize(&candidate).await else {
            debug!(path = %candidate.display(), "Image vanished, serving default");
            return self.fallback().await;
        };
        if !canonical.starts_with(&self.root) {
            return Err(ImageError::outside_root(requested));
        }

        Ok(candidate)
    }

    /// The default asset path, provided it still resolves inside the root.
    async fn fallback(&self) -> Result<PathBuf, ImageError> {
        let path = self.default_path();
        if let Ok(canonical) = tokio::fs::canonicalize(&path).await
            && !canonical.starts_with(&self.root)
        {
            return Err(ImageError::outside_root(&self.default_image));
        }
        Ok(path)
    }
}

/// True if `path` is non-empty and made only of normal components.
fn is_contained(path: &Path) -> bool {
    let mut components = path.components().peekable();
    components.peek().is_some()
        && components.all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn image_dir() -> (tempfile::TempDir, ImageResolver) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("default.jpg"), b"default").unwrap();
        std::fs::write(dir.path().join("present.jpg"), b"present").unwrap();
        let resolver = ImageResolver::new(dir.path(), "default.jpg").unwrap();
        (dir, resolver)
    }

    #[tokio::test]
    async fn test_resolve_present_image() {
        let (_dir, resolver) = image_dir();

        let path = resolver.resolve("present.jpg").await.unwrap();
        assert_eq!(path, resolver.root().join("present.jpg"));
    }

    #[tokio::test]
    async fn test_resolve_missing_image_falls_back() {
        let (_dir, resolver) = image_dir();

        let path = resolver.resolve("missing.jpg").await.unwrap();
        assert_eq!(path, resolver.default_path());
        assert_eq!(path, resolver.root().join("default.jpg"));
    }

    #[tokio::test]
    async fn test_resolve_directory_named_like_image_falls_back() {
        let (dir, resolver) = image_dir();
        std::fs::create_dir(dir.path().join("folder.jpg")).unwrap();

        let path = resolver.resolve("folder.jpg").await.unwrap();
        assert_eq!(path, resolver.default_path());
    }

    #[rstest]
    #[case("file.png")]
    #[case("image.jpeg")]
    #[case("jpg")]
    #[case("")]
    #[tokio::test]
    async fn test_resolve_rejects_wrong_extension(#[case] requested: &str) {
        let (_dir, resolver) = image_dir();

        let err = resolver.resolve(requested).await.unwrap_err();
        assert!(matches!(err, ImageError::InvalidExtension { .. }));
    }

    #[rstest]
    #[case("../secret.jpg")]
    #[case("nested/../../secret.jpg")]
    #[case("/etc/secret.jpg")]
    #[tokio::test]
    async fn test_resolve_rejects_traversal(#[case] requested: &str) {
        let (_dir, resolver) = image_dir();

        let err = resolver.resolve(requested).await.unwrap_err();
        assert!(matches!(err, ImageError::OutsideRoot { .. }));
    }

    #[tokio::test]
    async fn test_resolve_nested_image_inside_root() {
        let (dir, resolver) = image_dir();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("inner.jpg"), b"inner").unwrap();

        let path = resolver.resolve("nested/inner.jpg").await.unwrap();
        assert_eq!(path, resolver.root().join("nested/inner.jpg"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_resolve_rejects_symlink_escape() {
        let outside = tempfile::tempdir().unwrap();
        let target = outside.path().join("secret.jpg");
        std::fs::write(&target, b"secret").unwrap();

        let (dir, resolver) = image_dir();
        std::os::unix::fs::symlink(&target, dir.path().join("link.jpg")).unwrap();

        let err = resolver.resolve("link.jpg").await.unwrap_err();
        assert!(matches!(err, ImageError::OutsideRoot { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_new_rejects_default_symlinked_outside_root() {
        let outside = tempfile::tempdir().unwrap();
        let target = outside.path().join("secret.jpg");
        std::fs::write(&target, b"secret").unwrap();

        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("default.jpg")).unwrap();

        let err = ImageResolver::new(dir.path(), "default.jpg").unwrap_err();
        assert!(matches!(err, ImageError::OutsideRoot { ref filename } if filename == "default.jpg"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_fallback_rejects_default_swapped_for_symlink() {
        let outside = tempfile::tempdir().unwrap();
        let target = outside.path().join("secret.jpg");
        std::fs::write(&target, b"secret").unwrap();

        let (dir, resolver) = image_dir();
        std::fs::remove_file(dir.path().join("default.jpg")).unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("default.jpg")).unwrap();

        let err = resolver.resolve("missing.jpg").await.unwrap_err();
        assert!(matches!(err, ImageError::OutsideRoot { .. }));
    }

    #[test]
    fn test_new_accepts_missing_default() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = ImageResolver::new(dir.path(), "default.jpg").unwrap();
        assert_eq!(resolver.default_path(), resolver.root().join("default.jpg"));
    }

    #[test]
    fn test_new_rejects_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageResolver::new(dir.path().join("absent"), "default.jpg").unwrap_err();
        assert!(matches!(err, ImageError::RootUnavailable(_)));
    }

    #[test]
    fn test_new_rejects_default_outside_root() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageResolver::new(dir.path(), "../default.jpg").unwrap_err();
        assert!(matches!(err, ImageError::OutsideRoot { .. }));
    }
}
