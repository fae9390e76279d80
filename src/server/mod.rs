//! Server
//!
//! Configuration loading, application state, and startup:
//!
//! - **`config`** - environment-driven `ServerConfig`
//! - **`state`** - `AppState` shared with every handler
//! - **`init`** - `create_app`, the staged router/store assembly

pub mod config;
pub mod init;
pub mod state;

pub use config::{ServerConfig, StorageConfig};
pub use init::{create_app, create_app_with_config};
pub use state::AppState;
