/**
 * Current User Handler
 *
 * GET /api/auth/me - returns the signed-in caller's profile. The route sits
 * behind the session middleware, so an unauthenticated request never
 * reaches this handler.
 */

use axum::response::Json;

use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::models::UserProfile;

/// Current user handler.
pub async fn me(AuthUser(profile): AuthUser) -> Result<Json<UserProfile>, AppError> {
    Ok(Json(profile))
}
