//! Wire messages for the `leader_election` package.
//!
//! Mirrors `proto/leader_election.proto` field for field. The service stubs
//! (`peer_registration_{client,server}` and `leader_election_{client,server}`)
//! are generated by `build.rs`.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PeerRequest {
    #[prost(int32, tag = "1")]
    pub node_id: i32,
    #[prost(string, tag = "2")]
    pub address: ::prost::alloc::string::String,
    #[prost(int32, tag = "3")]
    pub port: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PeerResponse {
    #[prost(string, tag = "1")]
    pub status: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EmptyRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Peer {
    #[prost(int32, tag = "1")]
    pub node_id: i32,
    #[prost(string, tag = "2")]
    pub address: ::prost::alloc::string::String,
    #[prost(int32, tag = "3")]
    pub port: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PeerList {
    #[prost(message, repeated, tag = "1")]
    pub peers: ::prost::alloc::vec::Vec<Peer>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ElectionRequest {
    #[prost(int32, tag = "1")]
    pub node_id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ElectionResponse {
    #[prost(string, tag = "1")]
    pub status: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub max_id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CoordinatorRequest {
    #[prost(int32, tag = "1")]
    pub leader_id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CoordinatorResponse {
    #[prost(string, tag = "1")]
    pub status: ::prost::alloc::string::String,
}

include!(concat!(env!("OUT_DIR"), "/leader_election.PeerRegistration.rs"));
include!(concat!(env!("OUT_DIR"), "/leader_election.LeaderElection.rs"));

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    const SCHEMA: &str = include_str!("../proto/leader_election.proto");

    #[test]
    fn test_schema_declares_every_rpc() {
        assert!(SCHEMA.contains("package leader_election;"));
        for rpc in [
            "rpc RegisterPeer (PeerRequest) returns (PeerResponse);",
            "rpc GetPeers (EmptyRequest) returns (PeerList);",
            "rpc StartElection (ElectionRequest) returns (ElectionResponse);",
            "rpc Coordinator (CoordinatorRequest) returns (CoordinatorResponse);",
        ] {
            assert!(SCHEMA.contains(rpc), "missing from schema: {}", rpc);
        }
    }

    #[test]
    fn test_field_numbers_match_schema() {
        assert!(SCHEMA.contains("int32 max_id = 2;"));
        assert!(SCHEMA.contains("int32 port = 3;"));

        // status = 1 (length-delimited), max_id = 2 (varint)
        let bytes = ElectionResponse {
            status: "x".into(),
            max_id: 9,
        }
        .encode_to_vec();
        assert_eq!(bytes, vec![0x0a, 0x01, b'x', 0x10, 0x09]);

        // node_id = 1, address = 2, port = 3
        let bytes = PeerRequest {
            node_id: 5,
            address: "h".into(),
            port: 7,
        }
        .encode_to_vec();
        assert_eq!(bytes, vec![0x08, 0x05, 0x12, 0x01, b'h', 0x18, 0x07]);
    }
}
