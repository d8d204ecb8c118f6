// @zen-component: RTE-WalkLoop
//
//! Walking loop generator.
//!
//! This is a placeholder: the loop is a fixed square around the origin and
//! ignores streets, terrain and the requested duration. It exists so the
//! widget has a polyline to draw until a routing backend is wired in.

use tracing::debug;

use crate::models::{Coordinate, RoutePoint, WalkRoute, WidgetSnapshot};
use crate::store::LastResultStore;

/// Offset between loop vertices, in degrees (roughly 330 m of latitude).
pub const LOOP_STEP_DEG: f64 = 0.003;

/// Fixed five-point closed loop: origin, north, north-east, east, origin.
pub fn walk_loop(origin: Coordinate) -> Vec<RoutePoint> {
    let Coordinate {
        latitude: lat,
        longitude: lng,
    } = origin;
    vec![
        RoutePoint { lat, lng },
        RoutePoint {
            lat: lat + LOOP_STEP_DEG,
            lng,
        },
        RoutePoint {
            lat: lat + LOOP_STEP_DEG,
            lng: lng + LOOP_STEP_DEG,
        },
        RoutePoint {
            lat,
            lng: lng + LOOP_STEP_DEG,
        },
        RoutePoint { lat, lng },
    ]
}

/// Build a walking loop and publish it to the widget slot.
pub async fn plan_walk(
    store: &LastResultStore,
    origin: Coordinate,
    duration_minutes: u32,
) -> WalkRoute {
    let points = walk_loop(origin);
    let message = format!("Ruta circular de {duration_minutes} minutos");
    debug!(
        lat = origin.latitude,
        lng = origin.longitude,
        duration_minutes,
        "generated walk loop"
    );

    store
        .replace(WidgetSnapshot::with_route(
            "generate_walk_route",
            &message,
            points.clone(),
        ))
        .await;

    WalkRoute {
        duration_minutes,
        points,
        message,
    }
}
