//! Backend configuration loaded from the process environment.

use anyhow::{anyhow, Context, Result};

/// The database used when nothing else is configured
pub const DEFAULT_DATABASE_URL: &str = "sqlite:sales.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const DATABASE_URL_VAR: &str = "SALES_DATABASE_URL";
pub const MAX_CONNECTIONS_VAR: &str = "SALES_DB_MAX_CONNECTIONS";
pub const LOG_FILTER_VAR: &str = "SALES_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// sqlx SQLite URL, e.g. `sqlite:sales.db` or `sqlite::memory:`
    pub database_url: String,
    pub max_connections: u32,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl BackendConfig {
    /// Read the configuration from `SALES_*` environment variables,
    /// falling back to defaults for anything unset
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(DATABASE_URL_VAR) {
            let url = url.trim();
            if url.is_empty() {
                return Err(anyhow!("{} must not be empty", DATABASE_URL_VAR));
            }
            config.database_url = url.to_string();
        }

        if let Some(raw) = lookup(MAX_CONNECTIONS_VAR) {
            let max_connections: u32 = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: {:?}", MAX_CONNECTIONS_VAR, raw))?;
            if max_connections == 0 {
                return Err(anyhow!("{} must be at least 1", MAX_CONNECTIONS_VAR));
            }
            config.max_connections = max_connections;
        }

        if let Some(filter) = lookup(LOG_FILTER_VAR) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}
