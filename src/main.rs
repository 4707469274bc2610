//! mynova-list-server binary
//!
//! Serves the report list API over HTTP. All state is process-memory,
//! seeded with synthetic reports at startup and reset on restart.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use mynova_list_server::{run_server, ServerConfig};

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "mynova-list-server",
    version,
    about = "HTTP API backing the MyNova unified report list page"
)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value_t = 3030)]
    port: u16,

    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Number of synthetic reports to seed the store with
    #[arg(long, default_value_t = mynova_list_server::store::DEFAULT_SEED_COUNT)]
    seed: u32,

    /// Allow any origin (development only)
    #[arg(long)]
    cors_permissive: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init_tracing(cli.debug)?;

    let bind_addr: SocketAddr = format!("{}:{}", cli.bind, cli.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", cli.bind, cli.port))?;

    let config = ServerConfig {
        bind_addr,
        cors_permissive: cli.cors_permissive,
        seed_count: cli.seed,
    };

    run_server(config).await?;
    Ok(())
}
