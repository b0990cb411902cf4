//! Request extractors.

use axum::{
    Form,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

/// Fields submitted when adding an item.
///
/// Accepts `application/x-www-form-urlencoded` and `multipart/form-data`.
/// Missing fields read as empty strings. For a multipart `image` file part the
/// part's filename is the declared image name; its bytes are discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemForm {
    /// Item name.
    #[serde(default)]
    pub name: String,
    /// Item category.
    #[serde(default)]
    pub category: String,
    /// Declared image name.
    #[serde(default)]
    pub image: String,
}

impl ItemForm {
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, Response> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(IntoResponse::into_response)?
        {
            let field_name = field.name().unwrap_or_default().to_owned();
            let file_name = field.file_name().map(str::to_owned);

            let value = match (field_name.as_str(), file_name) {
                ("image", Some(file_name)) => file_name,
                ("name" | "category" | "image", None) => {
                    field.text().await.map_err(IntoResponse::into_response)?
                }
                _ => continue,
            };

            match field_name.as_str() {
                "name" => form.name = value,
                "category" => form.category = value,
                _ => form.image = value,
            }
        }

        Ok(form)
    }
}

impl<S> FromRequest<S> for ItemForm
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Self::from_multipart(multipart).await
        } else {
            let Form(form) = Form::<Self>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(form)
        }
    }
}
