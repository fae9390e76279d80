/**
 * Backend Error Types
 *
 * This module defines the error types used across the backend.
 *
 * - `StoreError` - failures inside a storage backend (file I/O, JSON,
 *   database). Never shown to clients verbatim.
 * - `AppError` - errors surfaced by handlers and actions, convertible to
 *   HTTP responses.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced by a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O failure in the flat-file backend
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure in the flat-file backend
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Database failure in the SQLite backend
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure during SQLite startup
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// `create_user` with an email that is already registered
    #[error("email already registered")]
    DuplicateEmail,
}

/// Application-level errors returned by handlers and actions.
///
/// Each variant maps to an HTTP status code via [`AppError::status_code`].
/// Infra variants (`Store`, `Internal`) are logged server-side and surface
/// only a generic message to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed input (400)
    #[error("{message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// Caller is not signed in (401)
    #[error("Not authenticated")]
    Unauthorized,

    /// Caller is signed in but does not own the resource (403)
    #[error("{message}")]
    PermissionDenied {
        /// Generic permission message, no detail about the owner
        message: String,
    },

    /// Resource does not exist (404)
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Storage backend failure (500)
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Any other server-side failure (500)
    #[error("{message}")]
    Internal {
        /// Internal message, logged but replaced on the wire
        message: String,
    },
}

impl AppError {
    /// Create a validation error (400).
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a permission error (403).
    pub fn permission(message: impl Into<String>) -> Self {
        Self::PermissionDenied {
            message: message.into(),
        }
    }

    /// Create a not-found error (404).
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an internal error (500).
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::PermissionDenied { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message to put on the wire.
    ///
    /// Infra errors collapse to a generic message; the real cause is logged
    /// when the response is built.
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation { message }
            | Self::PermissionDenied { message }
            | Self::NotFound { message } => message.clone(),
            Self::Unauthorized => "Not authenticated".to_string(),
            Self::Store(_) | Self::Internal { .. } => "Internal server error".to_string(),
        }
    }
}
