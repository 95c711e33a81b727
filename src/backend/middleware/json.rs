/**
 * JSON Body Extractor
 *
 * Replacement for `axum::Json` on the request side. Axum's own extractor
 * answers bad payloads with a plain-text 400/415/422; this one turns them
 * into a `BackendError` so the client always gets the JSON error envelope.
 *
 * An empty body is read as `{}`, which lets routes with only optional
 * fields (such as `POST /topic/create`) be called without a body, and makes
 * required fields report "is required" instead of a parse error.
 */

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;
use crate::shared::SharedError;

/// Deserialized JSON request body
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T>
where
    T: DeserializeOwned,
{
    /// Parse a raw body
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SharedError> {
        let value = if bytes.iter().all(u8::is_ascii_whitespace) {
            serde_json::from_slice(b"{}")?
        } else {
            serde_json::from_slice(bytes)?
        };
        Ok(JsonBody(value))
    }
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| BackendError::handler(rejection.status(), rejection.body_text()))?;

        Self::from_bytes(&bytes).map_err(|err| {
            tracing::warn!("Rejected request body: {}", err);
            BackendError::from(err)
        })
    }
}
