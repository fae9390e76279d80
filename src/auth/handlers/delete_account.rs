/**
 * Delete Account Handler
 *
 * POST /api/auth/delete-account
 *
 * Deletes the caller's ideas together with the user record, then clears
 * the session cookie. The cascade order (ideas, then user, then session)
 * keeps a partial failure resumable: retrying the request re-runs whatever
 * is left. The SQLite backend additionally performs both deletions in one
 * transaction.
 */

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Json},
};

use crate::auth::handlers::types::SuccessResponse;
use crate::auth::session::clear_session_cookie;
use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Delete account handler.
///
/// # Errors
///
/// * `401 Unauthorized` - no valid session (rejected by the middleware)
/// * `500 Internal Server Error` - storage failure; the session is left in
///   place so the caller can retry
pub async fn delete_account(
    State(state): State<AppState>,
    AuthUser(profile): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let deleted_ideas = state.store.delete_user_with_ideas(&profile.id).await?;

    tracing::info!(
        "account deleted: {} ({} ideas removed)",
        profile.id,
        deleted_ideas
    );

    Ok((
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
        Json(SuccessResponse { success: true }),
    ))
}
