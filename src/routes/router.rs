/**
 * Router Assembly
 *
 * Combines the route tables into the final Axum router:
 *
 * 1. Public auth routes
 * 2. Protected routes behind the session middleware
 * 3. The CORS layer for the configured origin allow-list
 * 4. A 404 fallback for unknown paths
 */

use axum::{http::StatusCode, middleware::from_fn_with_state, Router};

use crate::middleware::auth::auth_middleware;
use crate::middleware::cors::cors_layer;
use crate::routes::api_routes::{protected_routes, public_routes};
use crate::server::state::AppState;

/// Create the Axum router with all routes and middleware configured.
pub fn create_router(state: AppState) -> Router {
    let protected =
        protected_routes().route_layer(from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes())
        .merge(protected)
        .layer(cors_layer(&state.config.allowed_origins))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(state)
}
