/**
 * Signout Handler
 *
 * POST /api/auth/signout - clears the session cookie. Succeeds whether or
 * not the caller had a session.
 */

use axum::{
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Json},
};

use crate::auth::handlers::types::MessageResponse;
use crate::auth::session::clear_session_cookie;

/// Sign out handler.
pub async fn signout() -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
        Json(MessageResponse {
            message: "Signed out successfully".to_string(),
        }),
    )
}
