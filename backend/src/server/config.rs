//! Server configuration from the process environment.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default bind address when `BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
/// Default database name when `MONGODB_DB` is unset.
pub const DEFAULT_DB_NAME: &str = "globetrotter";

/// Configuration failures during startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `BIND_ADDR` did not parse as a socket address.
    #[error("invalid BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        /// The rejected value.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Runtime settings assembled from environment variables.
///
/// - `BIND_ADDR`: listen address, default `0.0.0.0:5000`.
/// - `MONGODB_URI`: when set, user and question records live in MongoDB;
///   when unset, in-memory stores are used and state dies with the process.
/// - `MONGODB_DB`: database name, default `globetrotter`.
/// - `QUESTIONS_FILE`: JSON seed for the question dataset; when unset the
///   built-in dataset is used.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub bind_addr: SocketAddr,
    /// Optional MongoDB connection string.
    pub mongodb_uri: Option<String>,
    /// Database name used with `mongodb_uri`.
    pub mongodb_db: String,
    /// Optional question seed file.
    pub questions_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Assemble configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_bind =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = raw_bind
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: raw_bind,
                source,
            })?;

        Ok(Self {
            bind_addr,
            mongodb_uri: std::env::var("MONGODB_URI").ok(),
            mongodb_db: std::env::var("MONGODB_DB")
                .unwrap_or_else(|_| DEFAULT_DB_NAME.to_owned()),
            questions_file: std::env::var("QUESTIONS_FILE").ok().map(PathBuf::from),
        })
    }
}
