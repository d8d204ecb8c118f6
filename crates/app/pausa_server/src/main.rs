//! Pausa server binary.
//!
//! Serves the MCP endpoint at `/mcp` and the map widget at `/widget` on a
//! single listener.

use std::time::Duration;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;

use pausa_core::config::{
    DEFAULT_BIND_ADDR, DEFAULT_OVERPASS_TIMEOUT_SECS, DEFAULT_OVERPASS_URL, DEFAULT_PUBLIC_URL,
    PausaConfig,
};
use pausa_core::places::overpass::OverpassClient;
use pausa_core::store::LastResultStore;

/// CLI arguments for the Pausa server.
#[derive(Parser, Debug)]
#[command(name = "pausa_server", about = "Pausa MCP server and map widget", version)]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "PAUSA_BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    bind_addr: String,

    /// Overpass interpreter URL.
    #[arg(long, env = "OVERPASS_URL", default_value = DEFAULT_OVERPASS_URL)]
    overpass_url: String,

    /// Timeout for a single Overpass query, in seconds.
    #[arg(long, env = "OVERPASS_TIMEOUT_SECS", default_value_t = DEFAULT_OVERPASS_TIMEOUT_SECS)]
    overpass_timeout_secs: u64,

    /// Externally visible base URL, used in widget links.
    #[arg(long, env = "PAUSA_PUBLIC_URL", default_value = DEFAULT_PUBLIC_URL)]
    public_url: String,
}

impl From<Args> for PausaConfig {
    fn from(args: Args) -> Self {
        Self {
            bind_addr: args.bind_addr,
            overpass_url: args.overpass_url,
            overpass_timeout: Duration::from_secs(args.overpass_timeout_secs),
            public_url: args.public_url,
        }
    }
}

async fn shutdown_signal(ct: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        return;
    }
    info!("shutdown requested");
    ct.cancel();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("info,pausa_core=debug,pausa_mcp=debug")
                }),
        )
        .init();

    let config = PausaConfig::from(Args::parse());

    info!(
        bind_addr = %config.bind_addr,
        overpass_url = %config.overpass_url,
        "starting pausa_server"
    );

    let overpass = OverpassClient::new(&config)?;
    let store = LastResultStore::new();
    let ct = CancellationToken::new();

    let app = pausa_mcp::mcp_router(overpass, store.clone(), config.widget_url(), ct.clone())
        .merge(pausa_api::router(pausa_api::AppState {
            store,
            config: config.clone(),
        }));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(addr = %local_addr, "MCP server listening on /mcp");
    info!(url = %config.widget_url(), "widget available");

    tokio::spawn(shutdown_signal(ct.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { ct.cancelled().await })
        .await?;

    Ok(())
}
