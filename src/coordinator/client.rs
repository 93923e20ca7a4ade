//! Typed client for both arbiter services over one channel

use crate::common::{ClientConfig, Result};
use crate::coordinator::election::Nomination;
use crate::coordinator::registry::{NodeId, PeerRecord};
use crate::proto::leader_election_client::LeaderElectionClient;
use crate::proto::peer_registration_client::PeerRegistrationClient;
use crate::proto::*;
use tonic::transport::{Channel, Endpoint};

#[derive(Clone)]
pub struct ArbiterClient {
    registration: PeerRegistrationClient<Channel>,
    election: LeaderElectionClient<Channel>,
}

impl ArbiterClient {
    /// Connect with default timeouts.
    pub async fn connect(endpoint: impl Into<String>) -> Result<Self> {
        let config = ClientConfig {
            endpoint: endpoint.into(),
            ..Default::default()
        };
        Self::connect_with(&config).await
    }

    pub async fn connect_with(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let channel = Endpoint::from_shared(config.endpoint.clone())?
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .connect()
            .await?;
        tracing::debug!(endpoint = %config.endpoint, "connected to arbiter");
        Ok(Self::from_channel(channel))
    }

    pub fn from_channel(channel: Channel) -> Self {
        Self {
            registration: PeerRegistrationClient::new(channel.clone()),
            election: LeaderElectionClient::new(channel),
        }
    }

    pub async fn register_peer(
        &mut self,
        node_id: NodeId,
        address: impl Into<String>,
        port: i32,
    ) -> Result<String> {
        let request = tonic::Request::new(PeerRequest {
            node_id,
            address: address.into(),
            port,
        });

        let response = self.registration.register_peer(request).await?;
        Ok(response.into_inner().status)
    }

    pub async fn get_peers(&mut self) -> Result<Vec<PeerRecord>> {
        let response = self
            .registration
            .get_peers(tonic::Request::new(EmptyRequest {}))
            .await?;
        Ok(response
            .into_inner()
            .peers
            .into_iter()
            .map(|p| PeerRecord::new(p.node_id, p.address, p.port))
            .collect())
    }

    pub async fn start_election(&mut self, node_id: NodeId) -> Result<Nomination> {
        let request = tonic::Request::new(ElectionRequest { node_id });

        let response = self.election.start_election(request).await?.into_inner();
        Ok(Nomination {
            max_id: response.max_id,
            status: response.status,
        })
    }

    pub async fn declare_coordinator(&mut self, leader_id: NodeId) -> Result<String> {
        let request = tonic::Request::new(CoordinatorRequest { leader_id });

        let response = self.election.coordinator(request).await?;
        Ok(response.into_inner().status)
    }
}
