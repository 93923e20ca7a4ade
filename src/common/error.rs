//! Error types for the arbiter

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Registry and election operations never fail; everything here comes from
/// the transport, the configuration layer or the process environment.
#[derive(Error, Debug)]
pub enum Error {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Network Errors ===
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("gRPC error: {0}")]
    Grpc(#[from] tonic::Status),

    // === Config Errors ===
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration source error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    /// Did the call fail before reaching the arbiter's logic?
    ///
    /// Connection refusals, dropped channels and expired deadlines all count.
    pub fn is_transport(&self) -> bool {
        use tonic::Code;
        match self {
            Error::Transport(_) => true,
            Error::Grpc(status) => matches!(
                status.code(),
                Code::Unavailable | Code::DeadlineExceeded | Code::Cancelled
            ),
            _ => false,
        }
    }
}
