//! Authentication
//!
//! Local cookie-based sessions backed by the storage layer:
//!
//! - **`session`** - the `ideastream-session` cookie: build, clear, parse,
//!   and resolve to the current user
//! - **`password`** - bcrypt hashing and constant-time verification
//! - **`handlers`** - the `/api/auth/*` endpoint handlers

pub mod handlers;
pub mod password;
pub mod session;

pub use session::{clear_session_cookie, current_user, session_cookie, SESSION_COOKIE};
