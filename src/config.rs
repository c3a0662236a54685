//! Process configuration, read once at startup from the environment.

use std::net::SocketAddr;

use thiserror::Error;

pub const APP_NAME: &str = "CME Insights";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_DATABASE_NAME: &str = "cme_insights_demo";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

/// Default `RUST_LOG`-style filter when the env var is unset.
pub fn default_log_filter() -> &'static str {
    "info,cme_insights=debug"
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("MONGO_URI is not set")]
    MissingMongoUri,

    #[error("LISTEN_ADDR is not a valid socket address: {0}")]
    InvalidListenAddr(String),
}

/// Settings for the server and the seeder. No hot-reload; the store URI and
/// database name are fixed for the process lifetime.
#[derive(Debug, Clone)]
pub struct Settings {
    pub mongo_uri: String,
    pub database_name: String,
    pub listen_addr: SocketAddr,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key-value lookup. Keeps tests free of
    /// process-global environment mutation.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mongo_uri = lookup("MONGO_URI").ok_or(ConfigError::MissingMongoUri)?;
        let database_name =
            lookup("DATABASE_NAME").unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr
            .parse()
            .map_err(|_| ConfigError::InvalidListenAddr(listen_addr))?;

        Ok(Self {
            mongo_uri,
            database_name,
            listen_addr,
        })
    }
}
