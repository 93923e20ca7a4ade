//! gRPC handlers for the two arbiter services
//!
//! Both services wrap the same [`ArbiterState`]. The handlers only translate
//! between wire messages and the registry/election calls; they add no policy.

use crate::coordinator::state::ArbiterState;
use crate::proto::leader_election_server::{LeaderElection, LeaderElectionServer};
use crate::proto::peer_registration_server::{PeerRegistration, PeerRegistrationServer};
use crate::proto::*;
use std::sync::Arc;
use tonic::{Request, Response, Status};

/// PeerRegistration service: register and list peers.
#[derive(Clone)]
pub struct RegistrationService {
    state: Arc<ArbiterState>,
}

impl RegistrationService {
    pub fn new(state: Arc<ArbiterState>) -> Self {
        Self { state }
    }

    /// Converts this service into a gRPC server instance.
    pub fn into_server(self) -> PeerRegistrationServer<Self> {
        PeerRegistrationServer::new(self)
    }
}

#[tonic::async_trait]
impl PeerRegistration for RegistrationService {
    async fn register_peer(
        &self,
        req: Request<PeerRequest>,
    ) -> Result<Response<PeerResponse>, Status> {
        let PeerRequest {
            node_id,
            address,
            port,
        } = req.into_inner();

        let status = self.state.registry.register(node_id, address, port);
        Ok(Response::new(PeerResponse { status }))
    }

    async fn get_peers(&self, _req: Request<EmptyRequest>) -> Result<Response<PeerList>, Status> {
        let peers = self
            .state
            .registry
            .list_peers()
            .into_iter()
            .map(|p| Peer {
                node_id: p.node_id,
                address: p.address,
                port: p.port,
            })
            .collect();
        Ok(Response::new(PeerList { peers }))
    }
}

/// LeaderElection service: nominations and leader declarations.
#[derive(Clone)]
pub struct ElectionService {
    state: Arc<ArbiterState>,
}

impl ElectionService {
    pub fn new(state: Arc<ArbiterState>) -> Self {
        Self { state }
    }

    /// Converts this service into a gRPC server instance.
    pub fn into_server(self) -> LeaderElectionServer<Self> {
        LeaderElectionServer::new(self)
    }
}

#[tonic::async_trait]
impl LeaderElection for ElectionService {
    async fn start_election(
        &self,
        req: Request<ElectionRequest>,
    ) -> Result<Response<ElectionResponse>, Status> {
        let nomination = self.state.election.nominate(req.into_inner().node_id).await;
        Ok(Response::new(ElectionResponse {
            status: nomination.status,
            max_id: nomination.max_id,
        }))
    }

    async fn coordinator(
        &self,
        req: Request<CoordinatorRequest>,
    ) -> Result<Response<CoordinatorResponse>, Status> {
        let status = self
            .state
            .election
            .declare_leader(req.into_inner().leader_id)
            .await;
        Ok(Response::new(CoordinatorResponse { status }))
    }
}
