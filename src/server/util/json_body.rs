use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON request body extractor.
///
/// Decodes the body regardless of the `Content-Type` header. Any body that cannot be
/// read or decoded is rejected with a plain-text `Invalid JSON` 400 response, which is
/// deliberately distinct from the JSON-shaped errors produced by `AppError`.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| invalid_json())?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            tracing::debug!("Rejected request body: {}", e);
            invalid_json()
        })
    }
}

fn invalid_json() -> Response {
    (StatusCode::BAD_REQUEST, "Invalid JSON").into_response()
}
