/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, producing the uniform error envelope:
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 *
 * Internal failures are logged here with their full detail; the client only
 * sees the generic message.
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if self.is_internal() {
            tracing::error!("Request failed: {:?}", self);
        } else if status.is_server_error() {
            tracing::warn!("Request failed upstream: {}", self);
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
