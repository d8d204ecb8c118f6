//! # pausa_mcp
//!
//! MCP (Model Context Protocol) server for Pausa.
//!
//! Provides a Streamable HTTP MCP server exposing the four break tools. The
//! server is built as a library crate; `pausa_server` mounts it next to the
//! widget API.

pub mod hooks;
pub mod server;
pub mod tools;

use std::sync::Arc;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use pausa_core::places::overpass::OverpassClient;
use pausa_core::store::LastResultStore;

pub use server::PausaMcpServer;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Build an Axum router that serves the MCP Streamable HTTP endpoint at `/mcp`.
///
/// # Arguments
///
/// * `overpass` — client for the geodata service.
/// * `store` — last-result slot shared with the widget API.
/// * `widget_url` — link to the widget page, returned with map results.
/// * `ct` — cancellation token for graceful shutdown of SSE streams.
pub fn mcp_router(
    overpass: OverpassClient,
    store: LastResultStore,
    widget_url: String,
    ct: CancellationToken,
) -> axum::Router {
    let hook_pipeline = Arc::new(hooks::default_pipeline());

    let service: StreamableHttpService<PausaMcpServer, LocalSessionManager> =
        StreamableHttpService::new(
            move || {
                Ok(PausaMcpServer::new(
                    overpass.clone(),
                    store.clone(),
                    hook_pipeline.clone(),
                    widget_url.clone(),
                ))
            },
            Arc::new(LocalSessionManager::default()),
            StreamableHttpServerConfig {
                stateful_mode: true,
                cancellation_token: ct,
                ..Default::default()
            },
        );

    axum::Router::new().nest_service("/mcp", service)
}
