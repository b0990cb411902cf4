//! Shared errors and configuration for the catalog service.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error types with HTTP status mapping
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, CorsConfig, DataConfig, ImagesConfig, S3Config, ServerConfig};
pub use error::AppError;
