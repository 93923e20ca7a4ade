//! CLI for talking to a running arbiter

use arbiter::common::logging;
use arbiter::coordinator::PeerRecord;
use arbiter::ops::run_election;
use arbiter::{ArbiterClient, ClientConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arbiter")]
#[command(about = "Leader-election arbiter CLI")]
#[command(version)]
struct Cli {
    /// Arbiter URL (overrides the config file)
    #[arg(long, env = "ARBITER_CLIENT_ENDPOINT")]
    endpoint: Option<String>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a peer
    Register {
        /// Node ID
        #[arg(allow_negative_numbers = true)]
        node_id: i32,

        #[arg(long, default_value = "localhost")]
        address: String,

        #[arg(long, default_value = "50051")]
        port: i32,
    },

    /// List registered peers
    Peers {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Nominate a node and print the current highest id
    Nominate {
        /// Node ID
        #[arg(allow_negative_numbers = true)]
        node_id: i32,
    },

    /// Confirm a node as leader
    Declare {
        /// Leader node ID
        #[arg(allow_negative_numbers = true)]
        leader_id: i32,
    },

    /// Run the eight-node reference round
    Demo,
}

const DEMO_PEERS: [(i32, i32); 8] = [
    (5, 50051),
    (7, 50052),
    (1, 50053),
    (3, 50054),
    (9, 50054),
    (2, 50054),
    (4, 50054),
    (8, 50054),
];
const DEMO_CANDIDATES: [i32; 8] = [5, 7, 1, 9, 2, 4, 8, 3];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init("info");

    let cli = Cli::parse();

    let mut config = ClientConfig::load(cli.config.as_deref())?;
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    let mut client = ArbiterClient::connect_with(&config).await?;

    match cli.command {
        Commands::Register {
            node_id,
            address,
            port,
        } => {
            println!("{}", client.register_peer(node_id, address, port).await?);
        }

        Commands::Peers { json } => {
            let peers = client.get_peers().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&peers)?);
            } else {
                println!("Registered peers: {}", peers.len());
                for peer in peers {
                    println!("  {}", peer);
                }
            }
        }

        Commands::Nominate { node_id } => {
            let nomination = client.start_election(node_id).await?;
            println!(
                "Election response: {}, Highest ID: {}",
                nomination.status, nomination.max_id
            );
        }

        Commands::Declare { leader_id } => {
            let status = client.declare_coordinator(leader_id).await?;
            println!("Coordinator declaration response: {}", status);
        }

        Commands::Demo => {
            let peers: Vec<PeerRecord> = DEMO_PEERS
                .iter()
                .map(|&(id, port)| PeerRecord::new(id, "localhost", port))
                .collect();
            let report = run_election(&mut client, &peers, &DEMO_CANDIDATES).await?;
            println!("Election report:");
            println!("  Peers registered: {}", report.registered);
            println!("  Nominations: {}", report.nominations);
            if let Some(leader) = report.leader_id {
                println!("  Leader: Node {}", leader);
            }
            if let Some(confirmation) = report.confirmation {
                println!("  Confirmation: {}", confirmation);
            }
        }
    }

    Ok(())
}
