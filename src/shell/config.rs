use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const HOST_VAR: &str = "CAFES_HOST";
pub const PORT_VAR: &str = "CAFES_PORT";
pub const SEED_PATH_VAR: &str = "CAFES_SEED_PATH";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },

    #[error("{host}:{port} is not a valid listen address")]
    InvalidAddress { host: String, port: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Replaces the embedded menu when set.
    pub seed_path: Option<PathBuf>,
}

impl AppConfig {
    /// Reads the configuration from the process environment, after loading a
    /// `.env` file if one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup(HOST_VAR)
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup(PORT_VAR) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort {
                    var: PORT_VAR,
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        let seed_path = lookup(SEED_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            seed_path,
        })
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress {
                host: self.host.clone(),
                port: self.port,
            })
    }
}
