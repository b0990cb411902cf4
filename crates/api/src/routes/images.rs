//! Image routes.

use axum::{
    Router,
    extract::{Path, Request, State},
    response::{IntoResponse, Response},
    routing::get,
};
use tower::ServiceExt;
use tower_http::services::ServeFile;
use tracing::warn;

use catalog_shared::AppError;

use crate::AppState;
use crate::response::error_response;

/// Creates the image routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/image/{image_filename}", get(get_image))
}

/// GET `/image/{image_filename}`
/// Stream an image, substituting the default asset when it does not exist.
async fn get_image(
    State(state): State<AppState>,
    Path(image_filename): Path<String>,
    request: Request,
) -> Response {
    let path = match state.catalog.fetch_image(&image_filename).await {
        Ok(path) => path,
        Err(e) => {
            warn!(image_filename = %image_filename, error = %e, "Rejected image request");
            return error_response(&AppError::from(e));
        }
    };

    match ServeFile::new(path).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
    use tower::ServiceExt;

    use crate::test_support::{body_bytes, body_json, test_app};

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_present_image_is_served() {
        let app = test_app(true).await;

        let response = app.router.oneshot(get("/image/present.jpg")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "image/jpeg");
        assert_eq!(body_bytes(response).await, b"present image");
    }

    #[tokio::test]
    async fn test_missing_image_serves_default() {
        let app = test_app(true).await;

        let response = app.router.oneshot(get("/image/missing.jpg")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"default image");
    }

    #[tokio::test]
    async fn test_uploaded_image_replaces_default() {
        let app = test_app(true).await;
        std::fs::write(app.image_dir.path().join("late.jpg"), b"late image").unwrap();

        let response = app.router.oneshot(get("/image/late.jpg")).await.unwrap();

        assert_eq!(body_bytes(response).await, b"late image");
    }

    #[tokio::test]
    async fn test_wrong_extension_is_rejected() {
        let app = test_app(true).await;

        let response = app.router.oneshot(get("/image/file.png")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_encoded_traversal_is_rejected() {
        let app = test_app(true).await;

        let response = app
            .router
            .oneshot(get("/image/..%2Fsecret.jpg"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
