/**
 * Error Conversion
 *
 * Converts `AppError` into HTTP responses so handlers can return it
 * directly. Error responses are JSON:
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 *
 * Server-side failures (5xx) are logged here with their full cause before
 * the generic message goes on the wire.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {}", self);
        } else {
            tracing::debug!("request rejected ({}): {}", status.as_u16(), self);
        }

        let body = serde_json::json!({
            "error": self.client_message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
