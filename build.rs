//! Generates the tonic client/server glue for the two arbiter services.
//!
//! Message types are written by hand in `src/proto.rs` (mirroring
//! `proto/leader_election.proto`), so no protoc is needed at build time.

use tonic_build::manual::{Builder, Method, Service};

const PACKAGE: &str = "leader_election";
const CODEC: &str = "tonic::codec::ProstCodec";

fn unary(name: &str, route: &str, input: &str, output: &str) -> Method {
    Method::builder()
        .name(name)
        .route_name(route)
        .input_type(format!("crate::proto::{}", input))
        .output_type(format!("crate::proto::{}", output))
        .codec_path(CODEC)
        .build()
}

fn main() {
    let registration = Service::builder()
        .name("PeerRegistration")
        .package(PACKAGE)
        .method(unary("register_peer", "RegisterPeer", "PeerRequest", "PeerResponse"))
        .method(unary("get_peers", "GetPeers", "EmptyRequest", "PeerList"))
        .build();

    let election = Service::builder()
        .name("LeaderElection")
        .package(PACKAGE)
        .method(unary(
            "start_election",
            "StartElection",
            "ElectionRequest",
            "ElectionResponse",
        ))
        .method(unary(
            "coordinator",
            "Coordinator",
            "CoordinatorRequest",
            "CoordinatorResponse",
        ))
        .build();

    Builder::new().compile(&[registration, election]);

    println!("cargo:rerun-if-changed=build.rs");
}
