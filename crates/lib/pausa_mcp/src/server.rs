// @zen-component: MCP-Server
//
//! MCP server handler — defines the Pausa MCP server and its tools.

use std::future::Future;
use std::sync::Arc;

use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use pausa_core::models::Coordinate;
use pausa_core::places::overpass::OverpassClient;
use pausa_core::places::{DEFAULT_RADIUS_M, NearbyQuery};
use pausa_core::store::LastResultStore;

use crate::hooks::{HookContext, HookPipeline, ToolCallOutcome};
use crate::tools::types::{
    CoachMessageRequest, FindNearbyPlacesRequest, GenerateWalkRouteRequest,
    SuggestSoundtrackRequest, WidgetResult,
};
use crate::tools::validation::Validate;

/// Pausa MCP server handler.
///
/// Holds the Overpass client, the widget's last-result store, a hook
/// pipeline, and a `ToolRouter` for tool dispatch. Unknown tool names are
/// rejected by the router with a protocol error.
///
/// A new instance is created per MCP session by the `StreamableHttpService`
/// factory; all instances share the same store.
#[derive(Clone)]
pub struct PausaMcpServer {
    overpass: OverpassClient,
    store: LastResultStore,
    hook_pipeline: Arc<HookPipeline>,
    widget_url: String,
    tool_router: ToolRouter<Self>,
}

/// Helper to serialize a value to a pretty JSON CallToolResult.
fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, ErrorData> {
    let json = serde_json::to_string_pretty(value).map_err(internal_error)?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn internal_error(e: impl std::fmt::Display) -> ErrorData {
    ErrorData::new(ErrorCode::INTERNAL_ERROR, e.to_string(), None)
}

#[tool_router]
impl PausaMcpServer {
    /// Create a new server instance with all required dependencies.
    pub fn new(
        overpass: OverpassClient,
        store: LastResultStore,
        hook_pipeline: Arc<HookPipeline>,
        widget_url: String,
    ) -> Self {
        Self {
            overpass,
            store,
            hook_pipeline,
            widget_url,
            tool_router: Self::tool_router(),
        }
    }

    /// Return tool definitions registered in this server.
    #[cfg(test)]
    pub(crate) fn list_tools() -> Vec<rmcp::model::Tool> {
        Self::tool_router().list_all()
    }

    /// Run a tool body through the hook pipeline and serialize its result.
    ///
    /// The body receives the arguments as left by the before hooks, and the
    /// client receives the outcome as left by the after hooks.
    async fn run_tool<P, T, F, Fut>(
        &self,
        tool_name: &str,
        params: P,
        call: F,
    ) -> Result<CallToolResult, ErrorData>
    where
        P: Serialize + DeserializeOwned,
        T: Serialize,
        F: FnOnce(P) -> Fut,
        Fut: Future<Output = Result<T, ErrorData>>,
    {
        let ctx = HookContext::new(tool_name);
        let mut hook_params = serde_json::to_value(&params).map_err(internal_error)?;

        self.hook_pipeline
            .run_before(&ctx, &mut hook_params)
            .await
            .map_err(internal_error)?;

        let params: P = serde_json::from_value(hook_params)
            .map_err(|e| ErrorData::new(ErrorCode::INVALID_PARAMS, e.to_string(), None))?;
        let result = call(params).await;

        let mut outcome = match &result {
            Ok(value) => {
                ToolCallOutcome::Success(serde_json::to_value(value).map_err(internal_error)?)
            }
            Err(e) => ToolCallOutcome::Error(e.message.to_string()),
        };
        if let Err(e) = self.hook_pipeline.run_after(&ctx, &mut outcome).await {
            tracing::warn!(tool = tool_name, "after hook failed: {e}");
        }

        match (result, outcome) {
            (_, ToolCallOutcome::Success(value)) => json_result(&value),
            (Err(e), ToolCallOutcome::Error(message)) => Err(ErrorData {
                message: message.into(),
                ..e
            }),
            (Ok(_), ToolCallOutcome::Error(message)) => {
                Err(ErrorData::new(ErrorCode::INTERNAL_ERROR, message, None))
            }
        }
    }

    /// Find parks and quiet cafés near a coordinate.
    #[tool(
        description = "Find up to 5 parks and 5 quiet cafés near a coordinate for a short break"
    )]
    async fn find_nearby_places(
        &self,
        Parameters(request): Parameters<FindNearbyPlacesRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        self.run_tool("find_nearby_places", request, move |request| async move {
            request.validate()?;
            let query = NearbyQuery {
                center: Coordinate::new(request.latitude, request.longitude),
                radius_m: request.radius.unwrap_or(DEFAULT_RADIUS_M),
                mood: request.mood.clone(),
                category: request.category.map(Into::into),
            };
            let result = pausa_core::places::find_nearby(&self.overpass, &self.store, &query).await;
            Ok::<_, ErrorData>(WidgetResult {
                result,
                widget_url: self.widget_url.clone(),
            })
        })
        .await
    }

    /// Generate a short circular walk around a coordinate.
    #[tool(
        description = "Generate a short circular walking loop starting and ending at a coordinate"
    )]
    async fn generate_walk_route(
        &self,
        Parameters(request): Parameters<GenerateWalkRouteRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        self.run_tool("generate_walk_route", request, move |request| async move {
            request.validate()?;
            let result = pausa_core::route::plan_walk(
                &self.store,
                Coordinate::new(request.latitude, request.longitude),
                request.duration_minutes,
            )
            .await;
            Ok::<_, ErrorData>(WidgetResult {
                result,
                widget_url: self.widget_url.clone(),
            })
        })
        .await
    }

    /// Suggest something to listen to during the break.
    #[tool(description = "Suggest two soundtracks for a break based on the user's mood")]
    async fn suggest_soundtrack(
        &self,
        Parameters(request): Parameters<SuggestSoundtrackRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        self.run_tool("suggest_soundtrack", request, move |request| async move {
            request.validate()?;
            Ok::<_, ErrorData>(pausa_core::soundtrack::suggest(&request.mood))
        })
        .await
    }

    /// Write a short coaching message after the break.
    #[tool(
        description = "Write a short coaching message based on the user's mood and what they did during the break"
    )]
    async fn coach_message(
        &self,
        Parameters(request): Parameters<CoachMessageRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        self.run_tool("coach_message", request, move |request| async move {
            request.validate()?;
            Ok::<_, ErrorData>(pausa_core::coach::compose(
                &request.mood,
                &request.experience,
                request.name.as_deref(),
            ))
        })
        .await
    }
}

#[tool_handler]
impl ServerHandler for PausaMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Pausa MCP server — nearby parks and cafés, walking loops, soundtracks and \
                 coaching for micro breaks"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
