//! Environment layer of the configuration
//!
//! Kept in its own test binary: it mutates process-wide environment
//! variables, and only this one test reads them.

use arbiter::{ArbiterConfig, ClientConfig};
use std::io::Write;
use std::net::SocketAddr;

const VARS: [&str; 4] = [
    "ARBITER_REQUEST_TIMEOUT_MS",
    "ARBITER_LISTEN_ADDR",
    "ARBITER_CLIENT_REQUEST_TIMEOUT_MS",
    "ARBITER_CLIENT_ENDPOINT",
];

#[test]
fn test_environment_overrides_file_and_defaults() {
    let mut server_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(server_file, "listen_addr = \"127.0.0.1:6000\"").unwrap();
    writeln!(server_file, "request_timeout_ms = 750").unwrap();
    writeln!(server_file, "log_level = \"debug\"").unwrap();

    let mut client_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(client_file, "endpoint = \"http://127.0.0.1:6000\"").unwrap();
    writeln!(client_file, "request_timeout_ms = 750").unwrap();

    std::env::set_var("ARBITER_REQUEST_TIMEOUT_MS", "1234");
    std::env::set_var("ARBITER_LISTEN_ADDR", "127.0.0.1:7000");
    std::env::set_var("ARBITER_CLIENT_REQUEST_TIMEOUT_MS", "4321");

    let server = ArbiterConfig::load(Some(server_file.path()));
    let client = ClientConfig::load(Some(client_file.path()));
    let client_without_file = ClientConfig::load(None);

    std::env::set_var("ARBITER_CLIENT_ENDPOINT", "http://10.0.0.1:50051");
    let client_endpoint = ClientConfig::load(None);

    for var in VARS {
        std::env::remove_var(var);
    }

    // Environment beats the file; untouched keys keep the file value.
    let server = server.unwrap();
    assert_eq!(server.request_timeout_ms, 1234);
    assert_eq!(server.listen_addr, "127.0.0.1:7000".parse::<SocketAddr>().unwrap());
    assert_eq!(server.log_level, "debug");

    // The client only sees its own prefix.
    let client = client.unwrap();
    assert_eq!(client.request_timeout_ms, 4321);
    assert_eq!(client.endpoint, "http://127.0.0.1:6000");

    // Environment beats the defaults too.
    let client_without_file = client_without_file.unwrap();
    assert_eq!(client_without_file.request_timeout_ms, 4321);
    assert_eq!(client_without_file.connect_timeout_ms, 3_000);

    assert_eq!(client_endpoint.unwrap().endpoint, "http://10.0.0.1:50051");

    // With the variables cleared, everything falls back to defaults.
    let server = ArbiterConfig::load(None).unwrap();
    assert_eq!(server.request_timeout_ms, 5_000);
    assert_eq!(server.listen_addr.port(), 50051);
}
