/**
 * Authentication Handler Types
 *
 * Request and response types shared by the auth endpoint handlers. Field
 * names follow the wire format (`displayName`).
 */

use serde::{Deserialize, Serialize};

/// Sign up request body.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub display_name: String,
}

/// Sign in request body.
#[derive(Debug, Deserialize, Serialize)]
pub struct SigninRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Forgot-password request body.
#[derive(Debug, Deserialize, Serialize)]
pub struct ForgotPasswordRequest {
    #[serde(default)]
    pub email: String,
}

/// Generic `{"message": ...}` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Generic `{"success": ...}` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}
