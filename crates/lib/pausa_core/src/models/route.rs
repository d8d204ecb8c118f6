//! Walking route model.

use serde::{Deserialize, Serialize};

/// One vertex of a walking loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub lat: f64,
    pub lng: f64,
}

/// A closed walking loop plus a short description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkRoute {
    pub duration_minutes: u32,
    pub points: Vec<RoutePoint>,
    pub message: String,
}
