//! Common utilities and types shared across the arbiter

pub mod config;
pub mod error;
pub mod logging;

pub use config::{ArbiterConfig, ClientConfig};
pub use error::{Error, Result};
