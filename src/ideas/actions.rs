/**
 * Idea Actions
 *
 * Server-side mutation entry points over the store. Every action takes the
 * authenticated caller (or their id) explicitly; nothing here trusts
 * request state.
 *
 * Ownership rules:
 * - deleting a non-owned idea fails with a permission error
 * - deleting an idea that no longer exists is a successful no-op
 * - marketplace status can only be changed by the owner, and setting it to
 *   the state it already has is a no-op (idempotent)
 */

use crate::error::AppError;
use crate::models::{Idea, IdeaPatch, NewIdea, UserProfile};
use crate::store::Store;

/// Minimum idea length in characters.
pub const MIN_IDEA_LEN: usize = 3;
/// Maximum idea length in characters.
pub const MAX_IDEA_LEN: usize = 280;

/// Create a new idea owned by `user`.
///
/// The 3-280 character bound is enforced here, server-side, regardless of
/// any client-side validation. Display name and photo are denormalized
/// onto the idea at write time; an empty display name falls back to
/// "Anonymous".
pub async fn post_idea(
    store: &dyn Store,
    user: &UserProfile,
    text: &str,
) -> Result<Idea, AppError> {
    let len = text.chars().count();
    if len < MIN_IDEA_LEN {
        return Err(AppError::validation("Idea must be at least 3 characters."));
    }
    if len > MAX_IDEA_LEN {
        return Err(AppError::validation("Idea cannot exceed 280 characters."));
    }

    let user_name = if user.display_name.is_empty() {
        "Anonymous".to_string()
    } else {
        user.display_name.clone()
    };

    let idea = store
        .create_idea(NewIdea {
            text: text.to_string(),
            user_id: user.id.clone(),
            user_name,
            user_photo_url: user.photo_url.clone(),
            is_marketplace: false,
        })
        .await?;

    tracing::debug!("idea {} posted by {}", idea.id, user.id);
    Ok(idea)
}

/// Delete an idea owned by `user_id`.
///
/// A missing idea is a successful no-op (the delete already "happened");
/// a non-owned idea is a permission error.
pub async fn delete_idea(store: &dyn Store, user_id: &str, idea_id: &str) -> Result<(), AppError> {
    let Some(idea) = store.find_idea_by_id(idea_id).await? else {
        tracing::debug!("delete of already-absent idea {}", idea_id);
        return Ok(());
    };

    if idea.user_id != user_id {
        return Err(AppError::permission(
            "You do not have permission to delete this idea.",
        ));
    }

    store.delete_idea(idea_id).await?;
    tracing::debug!("idea {} deleted by {}", idea_id, user_id);
    Ok(())
}

/// Set an idea's marketplace status to `publish`.
///
/// Same ownership rule as deletion, and a missing idea answers with the
/// same permission error as a non-owned one, so the response never reveals
/// which idea ids exist. Setting the flag to its current state returns the
/// idea unchanged, which makes double-invocation with the same target
/// state idempotent.
pub async fn set_marketplace(
    store: &dyn Store,
    user_id: &str,
    idea_id: &str,
    publish: bool,
) -> Result<Idea, AppError> {
    let permission_denied =
        || AppError::permission("You do not have permission to modify this idea.");

    let idea = store
        .find_idea_by_id(idea_id)
        .await?
        .ok_or_else(permission_denied)?;

    if idea.user_id != user_id {
        return Err(permission_denied());
    }

    if idea.is_marketplace == publish {
        return Ok(idea);
    }

    let updated = store
        .update_idea(
            idea_id,
            IdeaPatch {
                is_marketplace: Some(publish),
                ..Default::default()
            },
        )
        .await?
        .ok_or_else(permission_denied)?;

    tracing::debug!(
        "idea {} marketplace set to {} by {}",
        idea_id,
        publish,
        user_id
    );
    Ok(updated)
}

/// Bulk-delete all ideas owned by `user_id`. Returns the count removed.
///
/// Part of the account-deletion cascade; also usable on its own.
pub async fn delete_user_ideas(store: &dyn Store, user_id: &str) -> Result<u64, AppError> {
    let deleted = store.delete_ideas_by_user(user_id).await?;
    if deleted > 0 {
        tracing::debug!("deleted {} ideas owned by {}", deleted, user_id);
    }
    Ok(deleted)
}

/// The caller's own ideas, newest first.
pub async fn home_feed(store: &dyn Store, user_id: &str) -> Result<Vec<Idea>, AppError> {
    Ok(store.find_ideas_by_user(user_id).await?)
}

/// All published ideas across all users, newest first.
pub async fn marketplace_feed(store: &dyn Store) -> Result<Vec<Idea>, AppError> {
    Ok(store.find_marketplace_ideas().await?)
}
