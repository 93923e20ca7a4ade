//! Peer registry
//!
//! An append-only, insertion-ordered list of every node that registered with
//! the arbiter. Nothing is validated: duplicate ids, empty addresses and
//! out-of-range ports are all stored as given.

use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Node identity as carried on the wire.
pub type NodeId = i32;

/// One registration, exactly as the caller submitted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerRecord {
    pub node_id: NodeId,
    pub address: String,
    pub port: i32,
}

impl PeerRecord {
    pub fn new(node_id: NodeId, address: impl Into<String>, port: i32) -> Self {
        Self {
            node_id,
            address: address.into(),
            port,
        }
    }
}

impl std::fmt::Display for PeerRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node {} at {}:{}", self.node_id, self.address, self.port)
    }
}

#[derive(Debug, Default)]
pub struct PeerRegistry {
    peers: Mutex<Vec<PeerRecord>>,
}

impl PeerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Every critical section is a single push or clone, so a poisoned lock
    // still guards a consistent list.
    fn peers(&self) -> MutexGuard<'_, Vec<PeerRecord>> {
        self.peers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a peer and return the status echoed back to the caller.
    pub fn register(&self, node_id: NodeId, address: impl Into<String>, port: i32) -> String {
        let peer = PeerRecord::new(node_id, address, port);
        tracing::info!(
            node_id = peer.node_id,
            address = %peer.address,
            port = peer.port,
            "Peer registered: {}",
            peer
        );
        self.peers().push(peer);
        registered_status(node_id)
    }

    /// Snapshot of all registrations in insertion order.
    pub fn list_peers(&self) -> Vec<PeerRecord> {
        self.peers().clone()
    }

    pub fn len(&self) -> usize {
        self.peers().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn registered_status(node_id: NodeId) -> String {
    format!("Node {} registered successfully", node_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_register_echoes_node_id() {
        let registry = PeerRegistry::new();
        let status = registry.register(7, "localhost", 50052);
        assert_eq!(status, "Node 7 registered successfully");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_insertion_order_and_duplicates() {
        let registry = PeerRegistry::new();
        registry.register(3, "localhost", 50054);
        registry.register(3, "localhost", 50054);
        registry.register(1, "10.0.0.1", 7000);

        let peers = registry.list_peers();
        assert_eq!(
            peers,
            vec![
                PeerRecord::new(3, "localhost", 50054),
                PeerRecord::new(3, "localhost", 50054),
                PeerRecord::new(1, "10.0.0.1", 7000),
            ]
        );
    }

    #[test]
    fn test_malformed_input_is_accepted() {
        let registry = PeerRegistry::new();
        let status = registry.register(-42, "", 999_999);
        assert_eq!(status, "Node -42 registered successfully");
        assert_eq!(registry.list_peers()[0], PeerRecord::new(-42, "", 999_999));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let registry = PeerRegistry::new();
        registry.register(1, "localhost", 1);
        let snapshot = registry.list_peers();
        registry.register(2, "localhost", 2);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_concurrent_registration_loses_nothing() {
        let registry = Arc::new(PeerRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    for i in 0..250 {
                        registry.register(t * 1000 + i, "localhost", 50051);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let peers = registry.list_peers();
        assert_eq!(peers.len(), 2000);
        // Per-thread order survives interleaving.
        for t in 0..8 {
            let ids: Vec<_> = peers
                .iter()
                .map(|p| p.node_id)
                .filter(|id| id / 1000 == t)
                .collect();
            assert_eq!(ids, (t * 1000..t * 1000 + 250).collect::<Vec<_>>());
        }
    }
}
