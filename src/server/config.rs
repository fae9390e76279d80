/**
 * Server Configuration
 *
 * Configuration is loaded from environment variables with sensible
 * defaults for local development:
 *
 * - `SERVER_PORT` - listen port (default 3000)
 * - `DATABASE_URL` - when set, selects the SQLite backend
 * - `IDEASTREAM_DATA_DIR` - flat-file backend root (default `data`)
 * - `ALLOWED_ORIGINS` - comma-separated CORS allow-list; falls back to the
 *   built-in list
 *
 * Configuration errors are logged but do not prevent startup: a bad port
 * falls back to the default, an unreachable database falls back to the
 * flat-file store.
 */

use std::path::PathBuf;

/// Origins allowed to call `/api/*` when `ALLOWED_ORIGINS` is not set.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://idea-stream.vercel.app",
    "http://localhost:3000",
    "http://localhost:3001",
    "http://localhost:3002",
];

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATA_DIR: &str = "data";

/// Which storage backend to run against.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// Flat JSON files under `data_dir`.
    File { data_dir: PathBuf },
    /// SQLite via sqlx.
    Sqlite { url: String },
}

/// Runtime configuration for the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Self {
        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("invalid SERVER_PORT {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        let storage = match std::env::var("DATABASE_URL") {
            Ok(url) => StorageConfig::Sqlite { url },
            Err(_) => {
                let data_dir = std::env::var("IDEASTREAM_DATA_DIR")
                    .unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
                tracing::info!("DATABASE_URL not set, using flat-file store in {:?}", data_dir);
                StorageConfig::File {
                    data_dir: PathBuf::from(data_dir),
                }
            }
        };

        let allowed_origins = match std::env::var("ALLOWED_ORIGINS") {
            Ok(raw) => raw
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            Err(_) => DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
        };

        Self {
            port,
            allowed_origins,
            storage,
        }
    }
}
