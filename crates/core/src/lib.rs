//! Core catalog logic.
//!
//! This crate contains the catalog rules with ZERO web dependencies.
//!
//! # Modules
//!
//! - `catalog` - Item records, filename digests and the catalog service
//! - `image` - Image path resolution with default-asset fallback
//! - `storage` - Vendor-agnostic document storage backed by OpenDAL

pub mod catalog;
pub mod image;
pub mod storage;
