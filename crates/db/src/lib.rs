//! Persistence layer for the item collection.
//!
//! This crate provides:
//! - The JSON collection document repository
//! - Wiring from configuration to the storage backend

pub mod repositories;

pub use repositories::ItemRepository;

use catalog_core::catalog::CatalogError;
use catalog_core::storage::{StorageProvider, StorageService};
use catalog_shared::DataConfig;

/// Opens the item repository described by the data configuration.
///
/// # Errors
///
/// Returns an error if the storage backend cannot be initialized.
pub fn connect(data: &DataConfig) -> Result<ItemRepository, CatalogError> {
    let provider = StorageProvider::from_data_config(data);
    let storage = StorageService::from_provider(&provider)?;
    Ok(ItemRepository::new(storage, data.items_file.clone()))
}
