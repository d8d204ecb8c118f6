// @zen-component: MCP-ToolParams
//
//! Parameter and response types for the Pausa MCP tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use pausa_core::models::PlaceCategory;

/// Category filter accepted by `find_nearby_places`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    Park,
    QuietCafe,
}

impl From<CategoryFilter> for PlaceCategory {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::Park => PlaceCategory::Park,
            CategoryFilter::QuietCafe => PlaceCategory::QuietCafe,
        }
    }
}

/// Parameters for the `find_nearby_places` tool.
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct FindNearbyPlacesRequest {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Search radius in meters. Defaults to 900.
    pub radius: Option<u32>,
    /// How the user feels right now. Echoed back, not used for filtering.
    pub mood: Option<String>,
    /// Only look for this kind of place. Omit to get parks and cafés.
    pub category: Option<CategoryFilter>,
}

/// Parameters for the `generate_walk_route` tool.
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GenerateWalkRouteRequest {
    /// Starting latitude in decimal degrees.
    pub latitude: f64,
    /// Starting longitude in decimal degrees.
    pub longitude: f64,
    /// How long the walk should take, in minutes.
    pub duration_minutes: u32,
}

/// Parameters for the `suggest_soundtrack` tool.
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct SuggestSoundtrackRequest {
    /// Free-text description of the user's mood.
    pub mood: String,
}

/// Parameters for the `coach_message` tool.
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CoachMessageRequest {
    /// Free-text description of the user's mood.
    pub mood: String,
    /// What the user did during the break, e.g. "un paseo por el parque".
    pub experience: String,
    /// Name to address the user by.
    pub name: Option<String>,
}

/// Tool result that the map widget can also display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetResult<T> {
    #[serde(flatten)]
    pub result: T,
    /// Page rendering the latest map result.
    pub widget_url: String,
}
