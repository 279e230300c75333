//! Application configuration management.
//!
//! Configuration is read from environment variables with the `envy` crate,
//! after an optional `.env` file has been loaded.

use serde::Deserialize;

/// Where entity records are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// PostgreSQL through a sqlx connection pool.
    #[default]
    Postgres,
    /// Process-local maps; contents are lost on restart.
    Memory,
}

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `STORAGE_BACKEND` (optional): `postgres` or `memory`, defaults to `postgres`
/// - `DATABASE_URL` (required for `postgres`): PostgreSQL connection string
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `DATABASE_MAX_CONNECTIONS` (optional): pool size, defaults to 5
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage_backend: StorageBackend,

    pub database_url: Option<String>,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Env(#[from] envy::Error),

    #[error("DATABASE_URL must be set when STORAGE_BACKEND is postgres")]
    MissingDatabaseUrl,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Environment variable values cannot be parsed into expected types
    /// - The postgres backend is selected without a `DATABASE_URL`
    pub fn from_env() -> Result<Self, ConfigError> {
        // Does nothing if there is no .env file
        dotenvy::dotenv().ok();

        Self::from_vars(std::env::vars())
    }

    /// Build configuration from explicit key/value pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_backend == StorageBackend::Postgres && self.database_url.is_none() {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_to_postgres_on_port_3000() {
        let config = Config::from_vars(vars(&[(
            "DATABASE_URL",
            "postgres://localhost/storefront",
        )]))
        .unwrap();

        assert_eq!(config.storage_backend, StorageBackend::Postgres);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.database_max_connections, 5);
    }

    #[test]
    fn memory_backend_needs_no_database_url() {
        let config = Config::from_vars(vars(&[
            ("STORAGE_BACKEND", "memory"),
            ("SERVER_PORT", "8081"),
        ]))
        .unwrap();

        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(config.server_port, 8081);
        assert!(config.database_url.is_none());
    }

    #[test]
    fn postgres_backend_without_url_is_rejected() {
        let err = Config::from_vars(vars(&[("STORAGE_BACKEND", "postgres")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDatabaseUrl));
    }
}
