//! Arbiter server binary

use arbiter::{common::logging, Arbiter, ArbiterConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arbiter-server")]
#[command(about = "Leader-election arbiter (peer registry + election coordinator)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the arbiter
    Serve {
        /// TOML configuration file
        #[arg(long, env = "ARBITER_CONFIG")]
        config: Option<PathBuf>,

        /// Bind address for gRPC (overrides the config file)
        #[arg(long)]
        listen: Option<String>,

        /// Log level (trace, debug, info, warn, error)
        #[arg(long)]
        log_level: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            listen,
            log_level,
        } => {
            // File and environment first, CLI has priority
            let mut arbiter_config = ArbiterConfig::load(config.as_deref())?;
            if let Some(listen) = listen {
                arbiter_config.listen_addr = listen.parse()?;
            }
            if let Some(level) = log_level {
                arbiter_config.log_level = level;
            }

            logging::init(&arbiter_config.log_level);

            Arbiter::new(arbiter_config).serve().await?;
        }
    }

    Ok(())
}
