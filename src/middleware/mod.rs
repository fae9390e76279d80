//! Request Middleware
//!
//! - **`auth`** - resolves the session cookie to the current user and
//!   rejects unauthenticated requests on protected routes
//! - **`cors`** - fixed-origin CORS allow-list for `/api/*`

pub mod auth;
pub mod cors;
