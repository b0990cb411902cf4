//! Catalog service implementation.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use super::error::CatalogError;
use super::hasher::hash_image_name;
use super::types::{AddItemInput, Item};
use crate::image::ImageResolver;

/// Store trait for the item collection.
///
/// This trait is implemented by the db crate to provide the persisted
/// collection document.
pub trait ItemStore: Send + Sync {
    /// Load every item in creation order.
    fn read_all(&self) -> impl std::future::Future<Output = Result<Vec<Item>, CatalogError>> + Send;

    /// Append one item and persist the whole collection.
    fn append(
        &self,
        item: Item,
    ) -> impl std::future::Future<Output = Result<(), CatalogError>> + Send;
}

/// Catalog service for adding and listing items and locating their images.
pub struct CatalogService<S: ItemStore> {
    store: Arc<S>,
    images: Arc<ImageResolver>,
}

impl<S: ItemStore> CatalogService<S> {
    /// Create a new catalog service.
    #[must_use]
    pub fn new(store: Arc<S>, images: Arc<ImageResolver>) -> Self {
        Self { store, images }
    }

    /// Record a new item.
    ///
    /// The image filename is derived from the declared image name.
    ///
    /// # Errors
    ///
    /// Propagates item store errors.
    pub async fn add_item(&self, input: AddItemInput) -> Result<Item, CatalogError> {
        let item = Item {
            image_filename: hash_image_name(&input.image_name),
            name: input.name,
            category: input.category,
        };

        self.store.append(item.clone()).await?;

        info!(
            name = %item.name,
            category = %item.category,
            image_filename = %item.image_filename,
            "Item added"
        );
        Ok(item)
    }

    /// List all items in creation order.
    ///
    /// # Errors
    ///
    /// Propagates item store errors.
    pub async fn list_items(&self) -> Result<Vec<Item>, CatalogError> {
        self.store.read_all().await
    }

    /// Resolve the file to serve for a requested image.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for malformed filenames. Missing images are
    /// not errors.
    pub async fn fetch_image(&self, image_filename: &str) -> Result<PathBuf, CatalogError> {
        Ok(self.images.resolve(image_filename).await?)
    }
}
