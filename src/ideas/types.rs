/**
 * Idea Handler Types
 *
 * Request bodies for the idea endpoints. Responses reuse the `Idea` model
 * and the shared `SuccessResponse`.
 */

use serde::{Deserialize, Serialize};

/// Body of `POST /api/ideas`.
#[derive(Debug, Deserialize, Serialize)]
pub struct PostIdeaRequest {
    #[serde(default)]
    pub text: String,
}

/// Body of `POST /api/ideas/{id}/marketplace`.
#[derive(Debug, Deserialize, Serialize)]
pub struct SetMarketplaceRequest {
    #[serde(rename = "isMarketplace")]
    pub is_marketplace: bool,
}
