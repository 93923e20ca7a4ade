//! Arbiter server
//!
//! Hosts both services on a single listener. Every inbound call runs on its
//! own task of the multi-threaded runtime, so a slow caller never blocks the
//! accept loop.

use crate::common::{ArbiterConfig, Result};
use crate::coordinator::grpc::{ElectionService, RegistrationService};
use crate::coordinator::state::ArbiterState;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::server::Router;
use tonic::transport::Server;

pub struct Arbiter {
    config: ArbiterConfig,
    state: Arc<ArbiterState>,
}

impl Arbiter {
    pub fn new(config: ArbiterConfig) -> Self {
        Self::with_state(config, ArbiterState::new().shared())
    }

    pub fn with_state(config: ArbiterConfig, state: Arc<ArbiterState>) -> Self {
        Self { config, state }
    }

    pub fn state(&self) -> Arc<ArbiterState> {
        self.state.clone()
    }

    fn router(&self) -> Router {
        Server::builder()
            .timeout(self.config.request_timeout())
            .trace_fn(|req| tracing::info_span!("grpc", path = %req.uri().path()))
            .add_service(RegistrationService::new(self.state.clone()).into_server())
            .add_service(ElectionService::new(self.state.clone()).into_server())
    }

    /// Bind `listen_addr` and serve until Ctrl-C.
    pub async fn serve(self) -> Result<()> {
        self.serve_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
        })
        .await
    }

    pub async fn serve_with_shutdown<F>(self, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send,
    {
        let listener = TcpListener::bind(self.config.listen_addr).await?;
        self.serve_on(listener, signal).await
    }

    /// Serve on an already bound listener (tests bind port 0 and read it back).
    pub async fn serve_on<F>(self, listener: TcpListener, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send,
    {
        let local_addr = listener.local_addr()?;
        tracing::info!("Starting arbiter");
        tracing::info!("  gRPC API: {}", local_addr);
        tracing::info!("  Request timeout: {:?}", self.config.request_timeout());

        let router = self.router();
        tracing::info!("✓ Server started at {}", local_addr);

        router
            .serve_with_incoming_shutdown(TcpListenerStream::new(listener), signal)
            .await?;

        tracing::info!("Arbiter stopped");
        Ok(())
    }
}
