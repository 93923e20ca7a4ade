//! One full election round driven from the caller's side
//!
//! Register every peer, nominate each candidate in the given order, take the
//! maximum of the returned high-water marks and declare it leader. The
//! arbiter never picks the leader itself.

use crate::common::Result;
use crate::coordinator::{ArbiterClient, NodeId, PeerRecord};

#[derive(Debug)]
pub struct ElectionReport {
    pub registered: usize,
    pub nominations: usize,
    /// `None` when nothing was nominated.
    pub leader_id: Option<NodeId>,
    pub confirmation: Option<String>,
}

pub async fn run_election(
    client: &mut ArbiterClient,
    peers: &[PeerRecord],
    candidates: &[NodeId],
) -> Result<ElectionReport> {
    tracing::info!("Registering peers...");
    for peer in peers {
        let status = client
            .register_peer(peer.node_id, peer.address.clone(), peer.port)
            .await?;
        tracing::info!("{}", status);
    }

    tracing::info!("Starting elections...");
    let mut max_node_id: Option<NodeId> = None;
    for &node_id in candidates {
        let nomination = client.start_election(node_id).await?;
        tracing::info!(
            node_id,
            max_id = nomination.max_id,
            "Election response: {}, Highest ID: {}",
            nomination.status,
            nomination.max_id
        );
        max_node_id = Some(max_node_id.map_or(nomination.max_id, |m| m.max(nomination.max_id)));
    }

    let confirmation = match max_node_id {
        Some(leader_id) => {
            tracing::info!(leader_id, "Declaring the leader...");
            let status = client.declare_coordinator(leader_id).await?;
            tracing::info!("Coordinator declaration response: {}", status);
            Some(status)
        }
        None => {
            tracing::warn!("No candidates nominated, skipping leader declaration");
            None
        }
    };

    Ok(ElectionReport {
        registered: peers.len(),
        nominations: candidates.len(),
        leader_id: max_node_id,
        confirmation,
    })
}
