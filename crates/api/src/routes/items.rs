//! Item catalog routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{error, info};

use catalog_core::catalog::AddItemInput;
use catalog_shared::AppError;

use crate::AppState;
use crate::extractors::ItemForm;
use crate::response::{MessageResponse, error_response};

/// Creates the item routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/items", get(list_items).post(add_item))
}

/// GET `/items`
/// List every item in creation order.
async fn list_items(State(state): State<AppState>) -> Response {
    match state.catalog.list_items().await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list items");
            error_response(&AppError::from(e))
        }
    }
}

/// POST `/items`
/// Add an item from form fields `name`, `category` and `image`.
async fn add_item(State(state): State<AppState>, form: ItemForm) -> Response {
    info!(
        name = %form.name,
        category = %form.category,
        image = %form.image,
        "Receive item"
    );

    let input = AddItemInput {
        name: form.name,
        category: form.category,
        image_name: form.image,
    };

    match state.catalog.add_item(input).await {
        Ok(item) => (
            StatusCode::OK,
            Json(MessageResponse::new(format!("item received: {}", item.name))),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to add item");
            error_response(&AppError::from(e))
        }
    }
}
