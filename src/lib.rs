//! # arbiter
//!
//! A centralized leader-election arbiter:
//! - Peer registry: nodes announce their id, host and port
//! - Election coordinator: tracks the highest id nominated so far
//! - Leader declaration: records the id the caller confirms as leader
//! - gRPC for both services on a single listener
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   RegisterPeer / GetPeers     ┌────────────────────────┐
//! │  Caller  │ ────────────────────────────► │ Arbiter                │
//! │          │   StartElection / Coordinator │  - PeerRegistry        │
//! │          │ ────────────────────────────► │  - ElectionCoordinator │
//! └──────────┘                               └────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Start the arbiter
//! ```bash
//! arbiter-server serve --listen 0.0.0.0:50051
//! ```
//!
//! ### Drive a round from the CLI
//! ```bash
//! arbiter register 5 --address localhost --port 50051
//! arbiter nominate 5
//! arbiter declare 5
//! arbiter peers --json
//!
//! # Replay the reference eight-node round
//! arbiter demo
//! ```

pub mod common;
pub mod coordinator;
pub mod ops;
pub mod proto;

// Re-export commonly used types
pub use common::{ArbiterConfig, ClientConfig, Error, Result};
pub use coordinator::{Arbiter, ArbiterClient, ArbiterState};

/// Current version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
