// @zen-component: WGT-MapWidget
//
//! Map widget page and its data endpoint.
//!
//! The page is served with the current snapshot injected as initial data and
//! then polls `GET /api/widget-data` for newer snapshots.

use axum::Json;
use axum::extract::State;
use axum::response::Html;

use pausa_core::models::WidgetSnapshot;

use crate::AppState;
use crate::error::{AppError, AppResult};

const TEMPLATE: &str = include_str!("../../assets/widget.html");
const INITIAL_DATA_MARKER: &str = "__PAUSA_INITIAL_DATA__";
const DATA_URL_MARKER: &str = "__PAUSA_DATA_URL__";

/// Render the widget page with `snapshot` embedded in a `<script>` block.
///
/// `data_url` is absolute: the page usually runs inside a chat client's
/// frame on another origin.
pub fn render_page(
    snapshot: Option<&WidgetSnapshot>,
    data_url: &str,
) -> Result<String, serde_json::Error> {
    // "</" would let place names close the script element early.
    let initial = serde_json::to_string(&snapshot)?.replace("</", "<\\/");
    let data_url = serde_json::to_string(data_url)?;
    Ok(TEMPLATE
        .replace(DATA_URL_MARKER, &data_url)
        .replace(INITIAL_DATA_MARKER, &initial))
}

/// `GET /widget`
pub async fn widget_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let snapshot = state.store.latest().await;
    let data_url = format!(
        "{}{}",
        state.config.public_url.trim_end_matches('/'),
        crate::GET_API_WIDGET_DATA
    );
    Ok(Html(render_page(snapshot.as_ref(), &data_url)?))
}

/// `GET /api/widget-data` — latest snapshot, 404 until a tool has produced one.
pub async fn widget_data(State(state): State<AppState>) -> AppResult<Json<WidgetSnapshot>> {
    state
        .store
        .latest()
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No widget data yet".into()))
}
