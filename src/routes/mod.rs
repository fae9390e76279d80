//! Routes
//!
//! Route configuration: `api_routes` defines the public and protected API
//! route tables, `router` assembles them with middleware into the final
//! Axum router.

pub mod api_routes;
pub mod router;

pub use router::create_router;
