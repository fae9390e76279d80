/**
 * Session Authentication Middleware
 *
 * Protects routes that require a signed-in caller:
 *
 * 1. Reads the `ideastream-session` cookie
 * 2. Looks up the user it names
 * 3. Attaches the caller's profile to the request extensions
 *
 * Any failure - missing cookie, unknown user, store error - answers 401.
 * Handlers receive the profile through the `AuthUser` extractor.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::auth::session::current_user;
use crate::error::AppError;
use crate::models::UserProfile;
use crate::server::state::AppState;

/// Session authentication middleware.
///
/// Returns 401 when the session cookie is missing or does not resolve to a
/// stored user.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = current_user(state.store.as_ref(), request.headers())
        .await
        .ok_or_else(|| {
            tracing::warn!("unauthenticated request to {}", request.uri().path());
            AppError::Unauthorized
        })?;

    request.extensions_mut().insert(UserProfile::from(&user));

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated caller's profile.
///
/// Use as a handler parameter on routes behind [`auth_middleware`]. Rejects
/// with 401 when the profile is absent from the request extensions.
#[derive(Clone, Debug)]
pub struct AuthUser(pub UserProfile);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserProfile>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("authenticated profile missing from request extensions");
                AppError::Unauthorized
            })
    }
}
