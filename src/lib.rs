//! IdeaStream Backend
//!
//! IdeaStream is a small social posting service: authenticated users write
//! short text "ideas", see their own feed, and may publish an idea to a
//! shared "Marketplace" feed visible to other logged-in users. Account
//! deletion cascades to delete the user's ideas.
//!
//! # Architecture
//!
//! The crate is organized into focused modules, leaves first:
//!
//! - **`models`** - `User`, `Idea`, and the wire-facing `UserProfile`
//! - **`error`** - Error types and HTTP response conversion
//! - **`store`** - Storage abstraction with flat-file JSON and SQLite backends
//! - **`auth`** - Session cookies, password hashing, auth endpoint handlers
//! - **`ideas`** - Idea actions (post, delete, marketplace) and handlers
//! - **`users`** - Users directory listing handler
//! - **`middleware`** - Session authentication and CORS
//! - **`routes`** - Route configuration and router assembly
//! - **`server`** - Configuration, application state, initialization
//!
//! # Storage
//!
//! The `Store` trait is injected into `AppState` as a trait object and
//! selected by configuration: the flat-file backend keeps `users.json` and
//! `ideas.json` under a data directory, the SQLite backend uses a `sqlx`
//! pool. Handlers never know which backend they are talking to.

pub mod auth;
pub mod error;
pub mod ideas;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod store;
pub mod users;
