//! Payload rendered by the map widget.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Place, RoutePoint};

/// The most recent tool result shown by the widget.
///
/// A snapshot always replaces the previous one as a whole; places and route
/// are never merged across tool calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSnapshot {
    /// Tool that produced the snapshot.
    pub source: String,
    pub message: String,
    pub places: Vec<Place>,
    pub route: Vec<RoutePoint>,
    pub updated_at: DateTime<Utc>,
}

impl WidgetSnapshot {
    /// Snapshot holding a place list.
    pub fn with_places(source: &str, message: &str, places: Vec<Place>) -> Self {
        Self {
            source: source.to_string(),
            message: message.to_string(),
            places,
            route: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Snapshot holding a walking loop.
    pub fn with_route(source: &str, message: &str, route: Vec<RoutePoint>) -> Self {
        Self {
            source: source.to_string(),
            message: message.to_string(),
            places: Vec::new(),
            route,
            updated_at: Utc::now(),
        }
    }
}
