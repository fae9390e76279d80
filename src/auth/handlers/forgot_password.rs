/**
 * Forgot Password Handler
 *
 * POST /api/auth/forgot-password - acknowledges the request with a generic
 * message. No email is sent server-side, and the response does not reveal
 * whether an account exists for the address.
 */

use axum::response::Json;

use crate::auth::handlers::types::{ForgotPasswordRequest, MessageResponse};
use crate::error::AppError;

/// Forgot password handler.
///
/// # Errors
///
/// * `400 Bad Request` - email missing from the body
pub async fn forgot_password(
    Json(request): Json<ForgotPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    if request.email.is_empty() {
        return Err(AppError::validation("Email is required."));
    }

    tracing::info!("password reset requested");

    Ok(Json(MessageResponse {
        message: "Request received. If an account exists, a reset link will be sent.".to_string(),
    }))
}
