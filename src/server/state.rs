/**
 * Application State
 *
 * `AppState` is the state container cloned into every handler. It carries
 * the storage backend as a trait object - injected once at startup, never
 * global - and the loaded configuration.
 */

use std::sync::Arc;

use crate::server::config::ServerConfig;
use crate::store::Store;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Storage backend (flat-file or SQLite), selected at startup.
    pub store: Arc<dyn Store>,
    /// Loaded configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
