//! Error Types
//!
//! Error handling for the IdeaStream backend, split the same way the rest of
//! the crate is: `types` defines the error enums, `conversion` turns them
//! into HTTP responses.
//!
//! Errors fall into three buckets:
//! - validation errors (400 with a message)
//! - authorization errors (401 not signed in, 403 not the resource owner)
//! - backend/infra errors (500, logged server-side, generic message to the
//!   client)

pub mod conversion;
pub mod types;

pub use types::{AppError, StoreError};
