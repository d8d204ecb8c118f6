//! # pausa_api
//!
//! HTTP API for the Pausa map widget.

pub mod error;
pub mod handlers;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

use pausa_core::config::PausaConfig;
use pausa_core::store::LastResultStore;

use crate::handlers::{health, widget};

pub const GET_API_HEALTH: &str = "/api/health";
pub const GET_API_WIDGET_DATA: &str = "/api/widget-data";
pub const GET_WIDGET: &str = "/widget";

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Last result produced by the MCP tools.
    pub store: LastResultStore,
    /// Service configuration.
    pub config: PausaConfig,
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    // The widget is embedded in chat clients served from other origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(GET_API_HEALTH, get(health::health))
        .route(GET_API_WIDGET_DATA, get(widget::widget_data))
        .route(GET_WIDGET, get(widget::widget_page))
        .layer(cors)
        .with_state(state)
}
