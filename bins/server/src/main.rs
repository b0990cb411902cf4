//! Catalog API Server
//!
//! Main entry point for the catalog service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_api::{AppState, create_router};
use catalog_core::catalog::CatalogService;
use catalog_core::image::ImageResolver;
use catalog_db::connect;
use catalog_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Open the item collection, creating an empty one on first start
    let items = connect(&config.data)?;
    items.initialize().await?;
    info!(key = items.key(), "Item collection ready");

    // Image directory
    let images = ImageResolver::new(&config.images.dir, config.images.default_image.clone())?;
    info!(
        root = %images.root().display(),
        default_image = %config.images.default_image,
        "Image directory configured"
    );

    // Create application state
    let state = AppState {
        catalog: Arc::new(CatalogService::new(Arc::new(items), Arc::new(images))),
    };

    // Create router
    let app = create_router(state, &config.cors)?;

    // Start server
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(front_url = %config.cors.front_url, "Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
