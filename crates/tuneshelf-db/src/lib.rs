use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::env;
use std::time::Duration;

pub mod clock;
pub mod entities;
pub mod error;
pub mod links;

/// Re-export for convenience
pub use sea_orm;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::CatalogError;

/// Connection string used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://spotify.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout_secs: 8,
            idle_timeout_secs: 300,
        }
    }
}

impl DatabaseConfig {
    /// Config for a given connection string, other settings left at their defaults.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// The store as a user knows it: the file path of a `sqlite:` URL
    /// without scheme or query string (`spotify.db` for the default).
    pub fn store_name(&self) -> &str {
        let rest = self
            .url
            .strip_prefix("sqlite://")
            .or_else(|| self.url.strip_prefix("sqlite:"))
            .unwrap_or(self.url.as_str());
        rest.split_once('?').map_or(rest, |(path, _)| path)
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            url: env::var("DATABASE_URL").unwrap_or(defaults.url),
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_connections),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_connections),
            connect_timeout_secs: env::var("DB_CONNECT_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.connect_timeout_secs),
            idle_timeout_secs: env::var("DB_IDLE_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.idle_timeout_secs),
        }
    }
}

/// Connect to the catalog store and return a connection pool.
///
/// Failures are not retried; an unreachable store surfaces as
/// [`CatalogError::Connection`].
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, CatalogError> {
    let mut opt = ConnectOptions::new(&config.url);
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    tracing::debug!(url = %config.url, "opening catalog store");
    Ok(Database::connect(opt).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_local_sqlite_file() {
        let config = DatabaseConfig::default();
        assert_eq!(config.url, "sqlite://spotify.db?mode=rwc");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.min_connections, 1);
    }

    #[test]
    fn test_with_url_keeps_pool_defaults() {
        let config = DatabaseConfig::with_url("sqlite::memory:");
        assert_eq!(config.url, "sqlite::memory:");
        assert_eq!(config.connect_timeout_secs, 8);
        assert_eq!(config.idle_timeout_secs, 300);
    }

    #[test]
    fn test_store_name_strips_scheme_and_query() {
        assert_eq!(DatabaseConfig::default().store_name(), "spotify.db");
        assert_eq!(
            DatabaseConfig::with_url("sqlite:///var/lib/catalog.db?mode=rwc").store_name(),
            "/var/lib/catalog.db"
        );
        assert_eq!(
            DatabaseConfig::with_url("sqlite:catalog.db").store_name(),
            "catalog.db"
        );
        assert_eq!(
            DatabaseConfig::with_url("sqlite::memory:").store_name(),
            ":memory:"
        );
    }

    #[tokio::test]
    async fn test_connect_unreachable_store_is_connection_error() {
        let tmp = tempfile::tempdir().unwrap();
        // mode=ro refuses to create the missing file
        let url = format!(
            "sqlite://{}?mode=ro",
            tmp.path().join("missing").join("nope.db").display()
        );
        let mut config = DatabaseConfig::with_url(url);
        config.connect_timeout_secs = 1;

        let err = connect(&config).await.unwrap_err();
        assert!(err.is_connection(), "unexpected error: {err:?}");
    }

    #[tokio::test]
    async fn test_connect_creates_store_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("catalog.db");
        let config = DatabaseConfig::with_url(format!("sqlite://{}?mode=rwc", path.display()));

        let db = connect(&config).await.unwrap();
        db.ping().await.unwrap();
        assert!(path.exists());
    }
}
