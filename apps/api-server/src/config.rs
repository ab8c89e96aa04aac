//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use raga_infra::database::DatabaseConfig;

/// Default base URL of the remote content API.
const DEFAULT_CONTENT_API_BASE: &str = "https://cms.ragamagazine.example/wp-json";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Base URL of the WordPress-compatible content API.
    pub content_api_base: String,
    pub database: Option<DatabaseConfig>,
    /// Root directory for the filesystem object store; in-memory when unset.
    pub storage_root: Option<PathBuf>,
    /// Static bearer token guarding the admin surface; admin routes refuse
    /// everything when unset.
    pub admin_token: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(20),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            content_api_base: env::var("CONTENT_API_BASE")
                .unwrap_or_else(|_| DEFAULT_CONTENT_API_BASE.to_string()),
            database,
            storage_root: env::var("STORAGE_ROOT").ok().map(PathBuf::from),
            admin_token: env::var("ADMIN_TOKEN").ok().filter(|t| !t.is_empty()),
        }
    }
}
