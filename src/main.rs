//! Subnet Resolution Service
//!
//! An HTTP service built with Tokio and Axum that computes the network
//! portion of an IPv4 address from a subnet mask given in dotted-decimal
//! or CIDR bit-count form.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────┐
//!                      │               SUBNET SERVICE               │
//!                      │                                            │
//!  GET /subnet?ip&mask │  ┌─────────┐    ┌──────────┐              │
//!  ────────────────────┼─▶│  http   │───▶│ resolver │              │
//!                      │  │ server  │    │  engine  │              │
//!                      │  └─────────┘    └────┬─────┘              │
//!                      │                      │                     │
//!  200 / 404 / 400     │  ┌─────────┐        ▼                     │
//!  ◀───────────────────┼──│response │◀── subnet / classification   │
//!                      │  │  pages  │                               │
//!                      │  └─────────┘                               │
//!                      │                                            │
//!                      │  ┌──────────────────────────────────────┐ │
//!                      │  │        Cross-Cutting Concerns         │ │
//!                      │  │  config │ observability │ lifecycle   │ │
//!                      │  └──────────────────────────────────────┘ │
//!                      └───────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use subnet_resolver::config::{loader, ServiceConfig};
use subnet_resolver::lifecycle::Shutdown;
use subnet_resolver::observability::logging;
use subnet_resolver::HttpServer;

#[derive(Parser)]
#[command(name = "subnet-resolver")]
#[command(about = "HTTP service resolving the network portion of an IPv4 address", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind address (e.g. "127.0.0.1:3280").
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => loader::load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        strict_leading_octet = config.resolver.strict_leading_octet,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections; type Ctrl-C to stop"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(shutdown.trigger_on_ctrl_c());

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
