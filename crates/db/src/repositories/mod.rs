//! Repository abstractions for data access.
//!
//! Repositories implement the core store traits, hiding the storage
//! backend from the rest of the application.

pub mod item;

pub use item::ItemRepository;
