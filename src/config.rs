use std::net::{Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

const DEFAULT_HOST: Ipv4Addr = Ipv4Addr::UNSPECIFIED;
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "sqlite://./data/jugador_equipo.db";
const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000";

/// Settings for the REST server binary.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: Ipv4Addr,
    pub port: u16,
    pub database_url: String,
}

/// Settings for the controllers' HTTP context.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ServerConfig {
    /// Reads `HOST`, `PORT` and `DATABASE_URL` from the process environment.
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let host = match lookup("HOST") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "HOST", value })?,
            None => DEFAULT_HOST,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        Ok(Self {
            host,
            port,
            database_url,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let base_url = lookup("API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: "API_BASE_URL",
                value: base_url,
            });
        }

        Ok(Self { base_url })
    }
}
