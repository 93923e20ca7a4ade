//! Shared arbiter state
//!
//! One instance lives for the whole process and is handed to both gRPC
//! services. Tests build their own isolated instances.

use crate::coordinator::election::{ElectionCoordinator, ElectionStrategy};
use crate::coordinator::registry::PeerRegistry;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct ArbiterState {
    pub registry: PeerRegistry,
    pub election: ElectionCoordinator,
}

impl ArbiterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: impl ElectionStrategy + 'static) -> Self {
        Self {
            registry: PeerRegistry::new(),
            election: ElectionCoordinator::with_strategy(strategy),
        }
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
