//! Data models shared between the MCP tools and the widget API.

pub mod place;
pub mod route;
pub mod snapshot;

pub use place::{Coordinate, Place, PlaceCategory};
pub use route::{RoutePoint, WalkRoute};
pub use snapshot::WidgetSnapshot;
