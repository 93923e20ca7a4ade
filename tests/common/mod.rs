//! Shared helpers for integration tests

#![allow(dead_code)]

use arbiter::{Arbiter, ArbiterClient, ArbiterConfig, ArbiterState};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub struct TestArbiter {
    pub addr: SocketAddr,
    pub state: Arc<ArbiterState>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<arbiter::Result<()>>,
}

impl TestArbiter {
    pub async fn start() -> Self {
        Self::start_with(ArbiterConfig::default(), ArbiterState::new().shared()).await
    }

    pub async fn start_with(config: ArbiterConfig, state: Arc<ArbiterState>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let arbiter = Arbiter::with_state(config, state.clone());

        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(arbiter.serve_on(listener, async {
            let _ = rx.await;
        }));

        Self {
            addr,
            state,
            shutdown: Some(tx),
            handle,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn client(&self) -> ArbiterClient {
        ArbiterClient::connect(self.endpoint()).await.unwrap()
    }

    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap().unwrap();
    }
}
