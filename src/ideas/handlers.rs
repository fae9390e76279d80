/**
 * Idea Endpoint Handlers
 *
 * HTTP wrappers over the action layer. All routes here sit behind the
 * session middleware; the `AuthUser` extractor supplies the caller.
 *
 * - `POST   /api/ideas`                    - post an idea
 * - `GET    /api/ideas`                    - home feed (own ideas)
 * - `DELETE /api/ideas/{id}`               - delete an idea
 * - `POST   /api/ideas/{id}/marketplace`   - set marketplace status
 * - `GET    /api/marketplace`              - marketplace feed
 */

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::auth::handlers::types::SuccessResponse;
use crate::error::AppError;
use crate::ideas::actions;
use crate::ideas::types::{PostIdeaRequest, SetMarketplaceRequest};
use crate::middleware::auth::AuthUser;
use crate::models::Idea;
use crate::server::state::AppState;

/// Post a new idea owned by the caller.
pub async fn post_idea(
    State(state): State<AppState>,
    AuthUser(profile): AuthUser,
    Json(request): Json<PostIdeaRequest>,
) -> Result<Json<Idea>, AppError> {
    let idea = actions::post_idea(state.store.as_ref(), &profile, &request.text).await?;
    Ok(Json(idea))
}

/// The caller's own ideas, newest first.
pub async fn home_feed(
    State(state): State<AppState>,
    AuthUser(profile): AuthUser,
) -> Result<Json<Vec<Idea>>, AppError> {
    let feed = actions::home_feed(state.store.as_ref(), &profile.id).await?;
    Ok(Json(feed))
}

/// All published ideas, newest first.
pub async fn marketplace_feed(
    State(state): State<AppState>,
    AuthUser(_profile): AuthUser,
) -> Result<Json<Vec<Idea>>, AppError> {
    let feed = actions::marketplace_feed(state.store.as_ref()).await?;
    Ok(Json(feed))
}

/// Delete an idea the caller owns. Succeeds if the idea is already gone.
pub async fn delete_idea(
    State(state): State<AppState>,
    AuthUser(profile): AuthUser,
    Path(idea_id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    actions::delete_idea(state.store.as_ref(), &profile.id, &idea_id).await?;
    Ok(Json(SuccessResponse { success: true }))
}

/// Set the marketplace status of an idea the caller owns.
pub async fn set_marketplace(
    State(state): State<AppState>,
    AuthUser(profile): AuthUser,
    Path(idea_id): Path<String>,
    Json(request): Json<SetMarketplaceRequest>,
) -> Result<Json<Idea>, AppError> {
    let idea = actions::set_marketplace(
        state.store.as_ref(),
        &profile.id,
        &idea_id,
        request.is_marketplace,
    )
    .await?;
    Ok(Json(idea))
}
