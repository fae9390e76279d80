//! Ideas
//!
//! The idea domain: server-side mutation entry points (`actions`), the
//! HTTP handlers that expose them (`handlers`), and their request/response
//! types (`types`).
//!
//! Ownership is enforced here, not in the store: only the owning user may
//! delete an idea or change its marketplace status.

pub mod actions;
pub mod handlers;
pub mod types;
