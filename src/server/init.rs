/**
 * Server Initialization
 *
 * Staged startup:
 *
 * 1. Load configuration from the environment
 * 2. Open the storage backend it names
 * 3. Build the application state
 * 4. Assemble the router
 *
 * Startup is resilient where it can be: if the configured SQLite database
 * cannot be opened, the server logs the failure and falls back to the
 * flat-file store instead of refusing to start.
 */

use std::sync::Arc;

use axum::Router;

use crate::error::StoreError;
use crate::routes::router::create_router;
use crate::server::config::{ServerConfig, StorageConfig};
use crate::server::state::AppState;
use crate::store::{FileStore, SqliteStore, Store};

/// Create the application from environment configuration.
pub async fn create_app() -> Result<Router, StoreError> {
    create_app_with_config(ServerConfig::from_env()).await
}

/// Create the application from an explicit configuration.
///
/// Exposed separately so tests can run the full router against a
/// throwaway store.
pub async fn create_app_with_config(config: ServerConfig) -> Result<Router, StoreError> {
    tracing::info!("initializing IdeaStream backend");

    let store = open_store(&config.storage).await?;
    let state = AppState::new(store, config);

    let app = create_router(state);
    tracing::info!("router configured");

    Ok(app)
}

async fn open_store(storage: &StorageConfig) -> Result<Arc<dyn Store>, StoreError> {
    match storage {
        StorageConfig::Sqlite { url } => match SqliteStore::connect(url).await {
            Ok(store) => {
                tracing::info!("sqlite store ready");
                Ok(Arc::new(store))
            }
            Err(e) => {
                tracing::error!("failed to open sqlite store: {}", e);
                tracing::warn!("falling back to flat-file store in \"data\"");
                Ok(Arc::new(FileStore::open("data").await?))
            }
        },
        StorageConfig::File { data_dir } => {
            let store = FileStore::open(data_dir).await?;
            tracing::info!("flat-file store ready in {}", data_dir.display());
            Ok(Arc::new(store))
        }
    }
}
