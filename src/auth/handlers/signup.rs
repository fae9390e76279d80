/**
 * Signup Handler
 *
 * POST /api/auth/signup
 *
 * 1. Validate that email, password, and display name are present
 * 2. Hash the password with bcrypt
 * 3. Create the user record; the store rejects an already-registered
 *    email atomically, so racing signups cannot both land
 * 4. Establish the session cookie and return the profile
 *
 * All rejection paths answer 400, matching the public interface of the
 * service (duplicate emails included).
 */

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Json},
};

use crate::auth::handlers::types::SignupRequest;
use crate::auth::password::hash_password;
use crate::auth::session::session_cookie;
use crate::error::{AppError, StoreError};
use crate::models::{NewUser, UserProfile};
use crate::server::state::AppState;

/// Sign up handler.
///
/// # Errors
///
/// * `400 Bad Request` - missing fields, malformed email, or an email that
///   is already registered
/// * `500 Internal Server Error` - hashing or storage failure
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.email.is_empty() || request.password.is_empty() || request.display_name.is_empty() {
        return Err(AppError::validation(
            "Email, password, and display name are required",
        ));
    }

    if !request.email.contains('@') {
        tracing::warn!("rejected signup with malformed email");
        return Err(AppError::validation("Invalid email format"));
    }

    let password_hash = hash_password(&request.password)?;

    let result = state
        .store
        .create_user(NewUser {
            email: request.email.clone(),
            display_name: request.display_name,
            password_hash,
            photo_url: None,
        })
        .await;

    let user = match result {
        Ok(user) => user,
        Err(StoreError::DuplicateEmail) => {
            tracing::warn!("signup for already-registered email: {}", request.email);
            return Err(AppError::validation("User with this email already exists"));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!("user created: {} ({})", user.display_name, user.email);

    Ok((
        AppendHeaders([(SET_COOKIE, session_cookie(&user.id))]),
        Json(UserProfile::from(&user)),
    ))
}
