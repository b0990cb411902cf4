//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for items and images
//! - Form extractors for item submissions
//! - Error response mapping

pub mod extractors;
pub mod response;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method, header::InvalidHeaderValue};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use catalog_core::catalog::CatalogService;
use catalog_db::ItemRepository;
use catalog_shared::CorsConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Catalog service over the persisted item collection.
    pub catalog: Arc<CatalogService<ItemRepository>>,
}

/// Creates the main application router.
///
/// # Errors
///
/// Returns an error if the configured front-end origin is not a valid header value.
pub fn create_router(state: AppState, cors: &CorsConfig) -> Result<Router, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(&cors.front_url)?;

    Ok(Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::PUT, Method::POST, Method::DELETE]),
        )
        .with_state(state))
}
