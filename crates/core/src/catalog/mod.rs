//! Catalog items and the service that records them.
//!
//! This module provides:
//! - Item records and the persisted collection shape
//! - Filename digests derived from declared image names
//! - The `ItemStore` seam implemented by the persistence crate
//! - The catalog service orchestrating adds, listings and image lookups

mod error;
mod hasher;
mod service;
mod types;


pub use error::CatalogError;
pub use hasher::{IMAGE_EXTENSION, hash_image_name};
pub use service::{CatalogService, ItemStore};
pub use types::{AddItemInput, Item, ItemList};
