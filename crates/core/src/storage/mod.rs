//! Document storage using Apache OpenDAL.
//!
//! The item collection is a single document; this module reads and writes it
//! through a unified storage API so it can live on the local filesystem or in
//! S3-compatible object storage.
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 Apache OpenDAL                  │
//! ├─────────────────────────────────────────────────┤
//! │ op.read("key")   │ op.write("key", data)        │
//! │ op.stat("key")   │                              │
//! └─────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod service;

pub use config::StorageProvider;
pub use error::StorageError;
pub use service::StorageService;
