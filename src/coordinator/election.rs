//! Election coordinator
//!
//! The arbiter does not run a peer-to-peer protocol. Each node submits its id
//! once per round, the arbiter keeps a running maximum (the high-water mark),
//! and the caller decides whom to declare leader. The declared leader is
//! stored as given and never cross-checked against the high-water mark.
//!
//! The reduction sits behind [`ElectionStrategy`] so a different algorithm
//! can be plugged in without touching the RPC surface. The transitions are
//! async so an implementation may talk to peers before answering.

use crate::coordinator::registry::NodeId;
use async_trait::async_trait;
use std::sync::atomic::{AtomicI32, Ordering};

/// Reserved "no node" value. Both the high-water mark and the confirmed
/// leader start here; nodes must not use it as their id.
pub const NO_NODE: NodeId = -1;

pub const ELECTION_IN_PROGRESS: &str = "Election in progress";

/// State transitions an election algorithm must provide.
#[async_trait]
pub trait ElectionStrategy: Send + Sync {
    /// Submit a candidate and return the resulting high-water mark.
    async fn nominate(&self, node_id: NodeId) -> NodeId;

    /// Record `leader_id` as the confirmed leader.
    async fn declare_leader(&self, leader_id: NodeId);

    fn highest_seen(&self) -> NodeId;

    fn confirmed_leader(&self) -> NodeId;
}

/// Centralized max-reduction.
///
/// The final high-water mark depends only on the multiset of submitted ids,
/// never on their order or interleaving.
#[derive(Debug)]
pub struct MaxReduction {
    highest_seen: AtomicI32,
    confirmed_leader: AtomicI32,
}

impl MaxReduction {
    pub fn new() -> Self {
        Self {
            highest_seen: AtomicI32::new(NO_NODE),
            confirmed_leader: AtomicI32::new(NO_NODE),
        }
    }

    /// Fold `node_id` into the running maximum and return the result.
    pub fn observe(&self, node_id: NodeId) -> NodeId {
        let previous = self.highest_seen.fetch_max(node_id, Ordering::AcqRel);
        previous.max(node_id)
    }
}

impl Default for MaxReduction {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ElectionStrategy for MaxReduction {
    async fn nominate(&self, node_id: NodeId) -> NodeId {
        self.observe(node_id)
    }

    async fn declare_leader(&self, leader_id: NodeId) {
        self.confirmed_leader.store(leader_id, Ordering::Release);
    }

    fn highest_seen(&self) -> NodeId {
        self.highest_seen.load(Ordering::Acquire)
    }

    fn confirmed_leader(&self) -> NodeId {
        self.confirmed_leader.load(Ordering::Acquire)
    }
}

/// Result of a nomination as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nomination {
    pub max_id: NodeId,
    pub status: String,
}

pub struct ElectionCoordinator {
    strategy: Box<dyn ElectionStrategy>,
}

impl ElectionCoordinator {
    pub fn new() -> Self {
        Self::with_strategy(MaxReduction::new())
    }

    pub fn with_strategy(strategy: impl ElectionStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    pub async fn nominate(&self, node_id: NodeId) -> Nomination {
        let max_id = self.strategy.nominate(node_id).await;
        tracing::info!(node_id, max_id, "Election initiated by Node {}", node_id);
        Nomination {
            max_id,
            status: ELECTION_IN_PROGRESS.to_string(),
        }
    }

    pub async fn declare_leader(&self, leader_id: NodeId) -> String {
        self.strategy.declare_leader(leader_id).await;
        let highest_seen = self.strategy.highest_seen();
        if leader_id != highest_seen {
            tracing::debug!(
                leader_id,
                highest_seen,
                "declared leader differs from high-water mark"
            );
        }
        tracing::info!(leader_id, "New leader is Node {}", leader_id);
        confirmed_status(leader_id)
    }

    pub fn highest_seen(&self) -> NodeId {
        self.strategy.highest_seen()
    }

    pub fn confirmed_leader(&self) -> NodeId {
        self.strategy.confirmed_leader()
    }
}

impl Default for ElectionCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ElectionCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElectionCoordinator")
            .field("highest_seen", &self.highest_seen())
            .field("confirmed_leader", &self.confirmed_leader())
            .finish()
    }
}

pub fn confirmed_status(leader_id: NodeId) -> String {
    format!("Leader confirmed as Node {}", leader_id)
}
