/**
 * API Route Tables
 *
 * The API surface in two groups:
 *
 * ## Public (no session required)
 * - `POST /api/auth/signup`          - register and establish a session
 * - `POST /api/auth/signin`          - authenticate and establish a session
 * - `POST /api/auth/signout`         - clear the session cookie
 * - `POST /api/auth/forgot-password` - generic acknowledgment
 *
 * ## Protected (session middleware, 401 without a valid cookie)
 * - `GET    /api/auth/me`                  - current user profile
 * - `POST   /api/auth/delete-account`      - delete account and ideas
 * - `POST   /api/ideas`                    - post an idea
 * - `GET    /api/ideas`                    - home feed
 * - `DELETE /api/ideas/{id}`               - delete an idea
 * - `POST   /api/ideas/{id}/marketplace`   - set marketplace status
 * - `GET    /api/marketplace`              - marketplace feed
 * - `GET    /api/users`                    - users directory
 */

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::auth::handlers::{delete_account, forgot_password, me, signin, signout, signup};
use crate::ideas::handlers;
use crate::server::state::AppState;
use crate::users::list_users;

/// Routes that do not require a session.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/signin", post(signin))
        .route("/api/auth/signout", post(signout))
        .route("/api/auth/forgot-password", post(forgot_password))
}

/// Routes that require a signed-in caller. The session middleware is
/// attached in `router::create_router`.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/me", get(me))
        .route("/api/auth/delete-account", post(delete_account))
        .route(
            "/api/ideas",
            post(handlers::post_idea).get(handlers::home_feed),
        )
        .route("/api/ideas/{id}", delete(handlers::delete_idea))
        .route(
            "/api/ideas/{id}/marketplace",
            post(handlers::set_marketplace),
        )
        .route("/api/marketplace", get(handlers::marketplace_feed))
        .route("/api/users", get(list_users))
}
