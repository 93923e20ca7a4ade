//! Configuration for the arbiter server and its clients
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! environment variables. Binaries apply CLI flags last. The server reads
//! `ARBITER_*`; the client reads `ARBITER_CLIENT_*`.

use crate::common::{Error, Result};
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:50051";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:50051";
pub const SERVER_ENV_PREFIX: &str = "ARBITER";
pub const CLIENT_ENV_PREFIX: &str = "ARBITER_CLIENT";

/// Arbiter server configuration, overridable through `ARBITER_<FIELD>`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArbiterConfig {
    /// Bind address for the gRPC listener
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,

    /// Server-side deadline applied to every inbound call
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,

    /// Logging level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Client configuration, overridable through `ARBITER_CLIENT_<FIELD>`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Arbiter URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_ms: u64,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 50051))
}
fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
fn default_request_timeout() -> u64 {
    5_000
}
fn default_connect_timeout() -> u64 {
    3_000
}
fn default_log_level() -> String {
    "info".to_string()
}

fn layered(path: Option<&Path>, env_prefix: &str) -> ConfigBuilder<DefaultState> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }
    builder.add_source(Environment::with_prefix(env_prefix).try_parsing(true))
}

fn check_timeout(name: &str, value: u64) -> Result<()> {
    if value == 0 {
        return Err(Error::InvalidConfig(format!("{} must be greater than zero", name)));
    }
    Ok(())
}

impl ArbiterConfig {
    /// Load from defaults, an optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config: Self = layered(path, SERVER_ENV_PREFIX)
            .set_default("listen_addr", DEFAULT_LISTEN_ADDR)?
            .set_default("request_timeout_ms", default_request_timeout())?
            .set_default("log_level", default_log_level())?
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_timeout("request_timeout_ms", self.request_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            request_timeout_ms: default_request_timeout(),
            log_level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// Load from defaults, an optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config: Self = layered(path, CLIENT_ENV_PREFIX)
            .set_default("endpoint", DEFAULT_ENDPOINT)?
            .set_default("connect_timeout_ms", default_connect_timeout())?
            .set_default("request_timeout_ms", default_request_timeout())?
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::InvalidConfig("endpoint must not be empty".into()));
        }
        check_timeout("connect_timeout_ms", self.connect_timeout_ms)?;
        check_timeout("request_timeout_ms", self.request_timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            connect_timeout_ms: default_connect_timeout(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}
