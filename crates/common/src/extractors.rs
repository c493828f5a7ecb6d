//! Custom axum extractors for OnCode

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::Error;

/// JSON extractor whose rejections use the service's `{"error": ...}` body.
///
/// Replaces `Json<T>` in handlers. Only the shape of the payload is checked;
/// field contents are not validated.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

/// Rejection type for `ApiJson`: every deserialization failure becomes
/// `Error::Validation` (400).
#[derive(Debug)]
pub struct ApiJsonRejection(JsonRejection);

impl IntoResponse for ApiJsonRejection {
    fn into_response(self) -> Response {
        Error::Validation(self.0.body_text()).into_response()
    }
}

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ApiJsonRejection)?;
        Ok(ApiJson(value))
    }
}
