use std::env;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a valid port number, got {value:?}")]
    InvalidPort { name: &'static str, value: String },

    #[error("{host}:{port} is not a valid bind address")]
    InvalidAddress { host: String, port: u16 },
}

/// Server settings read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Collection holding product documents
    pub collection: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PRODUCT_API_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort {
                name: "PRODUCT_API_PORT",
                value,
            })?,
            None => 3001,
        };

        Ok(Self {
            host: lookup("PRODUCT_API_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            collection: lookup("PRODUCT_COLLECTION").unwrap_or_else(|| "products".to_string()),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress {
                host: self.host.clone(),
                port: self.port,
            })
    }
}
