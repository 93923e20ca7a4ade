//! Arbiter implementation
//!
//! The arbiter is responsible for:
//! - Peer registration (append-only registry)
//! - Nominations (running maximum of submitted ids)
//! - Recording the leader the caller declares

pub mod client;
pub mod election;
pub mod grpc;
pub mod registry;
pub mod server;
pub mod state;

pub use client::ArbiterClient;
pub use election::{ElectionCoordinator, ElectionStrategy, MaxReduction, Nomination, NO_NODE};
pub use registry::{NodeId, PeerRecord, PeerRegistry};
pub use server::Arbiter;
pub use state::ArbiterState;
