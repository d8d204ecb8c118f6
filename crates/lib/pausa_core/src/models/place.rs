// @zen-component: PLC-PlaceModel
//
//! Place model and categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rating attached to every place. Placeholder until a real ratings source exists.
pub const PLACEHOLDER_RATING: f64 = 4.5;

/// Walking-time estimate attached to every place. Placeholder, not computed.
pub const PLACEHOLDER_WALK_TIME: &str = "5-10 min";

/// A WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Kind of place suggested for a break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    Park,
    QuietCafe,
}

impl PlaceCategory {
    /// All categories, in the order they appear in merged results.
    pub const ALL: [PlaceCategory; 2] = [PlaceCategory::Park, PlaceCategory::QuietCafe];

    /// Wire name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            PlaceCategory::Park => "park",
            PlaceCategory::QuietCafe => "quiet_cafe",
        }
    }

    /// Name used when the source record carries no `name` tag.
    pub fn default_name(self) -> &'static str {
        match self {
            PlaceCategory::Park => "Parque cercano",
            PlaceCategory::QuietCafe => "Café tranquilo",
        }
    }
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A place suggested for a micro break.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Source id, `"<osm type>/<osm id>"`.
    pub id: String,
    pub name: String,
    pub category: PlaceCategory,
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    pub rating: f64,
    pub walk_time: String,
}
