// crates/server/src/main.rs
//! DevWell server binary.
//!
//! Opens the SQLite database, wires up the Axum app, and serves the API.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use devwell_db::Database;
use devwell_server::{create_app, init_metrics, AppState, ServerConfig, DEFAULT_PORT};

#[derive(Debug, Parser)]
#[command(name = "devwell", version, about = "DevWell wellness-tracking API server")]
struct Cli {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on. Falls back to DEVWELL_PORT, then PORT, then 8000.
    #[arg(long)]
    port: Option<u16>,

    /// SQLite database file. Defaults to the platform data directory.
    #[arg(long)]
    db_path: Option<PathBuf>,
}

fn resolve_port(cli: &Cli) -> u16 {
    cli.port
        .or_else(|| std::env::var("DEVWELL_PORT").ok().and_then(|p| p.parse().ok()))
        .or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
        .unwrap_or(DEFAULT_PORT)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    init_metrics();

    let db = match &cli.db_path {
        Some(path) => Database::new(path).await?,
        None => Database::open_default().await?,
    };

    let state = AppState::new(db, ServerConfig::from_env());
    if state.payments.is_none() {
        tracing::warn!("PAYSTACK_SECRET_KEY not set; payments routes will answer 503");
    }
    let app = create_app(state);

    let addr = SocketAddr::from((cli.host, resolve_port(&cli)));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, version = env!("CARGO_PKG_VERSION"), "DevWell API listening");

    axum::serve(listener, app).await?;
    Ok(())
}
