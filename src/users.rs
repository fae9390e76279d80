/**
 * Users Directory Handler
 *
 * GET /api/users - the "Users Database" directory view: every registered
 * user's display name and email, oldest first. Sits behind the session
 * middleware like the other protected routes. Responses carry only the
 * `UserSummary` projection; ids and password hashes never leave the store.
 */

use axum::{extract::State, response::Json};

use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::models::UserSummary;
use crate::server::state::AppState;

/// List every registered user as `{name, email}` rows.
pub async fn list_users(
    State(state): State<AppState>,
    AuthUser(_profile): AuthUser,
) -> Result<Json<Vec<UserSummary>>, AppError> {
    let users = state.store.find_all_users().await?;
    Ok(Json(users.iter().map(UserSummary::from).collect()))
}
