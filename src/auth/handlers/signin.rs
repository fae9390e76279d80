/**
 * Signin Handler
 *
 * POST /api/auth/signin
 *
 * Looks up the user by email and verifies the password with bcrypt.
 * Unknown email and wrong password both answer 400 with the same generic
 * message, so the error text leaks nothing about which emails exist.
 */

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Json},
};

use crate::auth::handlers::types::SigninRequest;
use crate::auth::password::verify_password;
use crate::auth::session::session_cookie;
use crate::error::AppError;
use crate::models::UserProfile;
use crate::server::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Sign in handler.
///
/// # Errors
///
/// * `400 Bad Request` - missing fields or invalid credentials (one
///   generic message for both)
/// * `500 Internal Server Error` - storage or verification failure
pub async fn signin(
    State(state): State<AppState>,
    Json(request): Json<SigninRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(AppError::validation("Email and password are required"));
    }

    let user = state
        .store
        .find_user_by_email(&request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("signin for unknown email");
            AppError::validation(INVALID_CREDENTIALS)
        })?;

    if !verify_password(&request.password, &user.password_hash)? {
        tracing::warn!("invalid password for user {}", user.id);
        return Err(AppError::validation(INVALID_CREDENTIALS));
    }

    tracing::info!("user signed in: {} ({})", user.display_name, user.email);

    Ok((
        AppendHeaders([(SET_COOKIE, session_cookie(&user.id))]),
        Json(UserProfile::from(&user)),
    ))
}
