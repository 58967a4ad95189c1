//! Server settings read from the environment at startup.

use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

static DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
static DATABASE_SCHEMES: [&str; 2] = ["postgres", "postgresql"];

/// Settings the server binary starts with
pub struct Config {
    /// Postgres connection string, from `DATABASE_URL`
    pub database_url: String,
    /// Address the HTTP listener binds, from `LISTEN_ADDR` or `0.0.0.0:8080`
    pub listen_addr: SocketAddr,
}

impl Config {
    /// Reads `DATABASE_URL` and `LISTEN_ADDR`, loading `.env` is left to the caller
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let listen_addr =
            std::env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

        Ok(Self {
            database_url: validate_database_url(database_url)?,
            listen_addr: parse_listen_addr(&listen_addr)?,
        })
    }
}

fn validate_database_url(value: String) -> Result<String, ConfigError> {
    let scheme = value
        .split_once("://")
        .map(|(scheme, _)| scheme.to_ascii_lowercase())
        .unwrap_or_default();

    if !DATABASE_SCHEMES.contains(&scheme.as_str()) {
        return Err(ConfigError::UnsupportedDatabaseScheme { scheme });
    }

    Ok(value)
}

fn parse_listen_addr(value: &str) -> Result<SocketAddr, ConfigError> {
    value.parse().map_err(|e| ConfigError::InvalidEnvValue {
        var: "LISTEN_ADDR".to_string(),
        reason: format!("{}", e),
    })
}
