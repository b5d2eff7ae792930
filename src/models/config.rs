use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Configuration options for the catalog service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Interface the HTTP server binds to.
    pub address: String,
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Secret used to derive the flash-message cookie key.
    pub secret: String,
}

impl ServerConfig {
    /// Minimum secret length accepted for cookie key derivation.
    const MIN_SECRET_LEN: usize = 32;

    /// Load configuration from an optional `config.yaml` overlaid with
    /// environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Config::builder()
            .set_default("database_url", "catalog.db")?
            .set_default("address", "127.0.0.1")?
            .set_default("port", 8080)?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::default())
            .build()?
            .try_deserialize()?;

        if config.secret.len() < Self::MIN_SECRET_LEN {
            return Err(ConfigError::Message(format!(
                "secret must be at least {} characters long",
                Self::MIN_SECRET_LEN
            )));
        }

        Ok(config)
    }
}
