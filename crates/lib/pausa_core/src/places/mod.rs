// @zen-component: PLC-NearbyLookup
//
//! Nearby-places lookup.
//!
//! Queries Overpass for parks and cafés around a coordinate, caps each
//! category, and reshapes raw elements into [`Place`] records.
//!
//! # Failure policy
//!
//! A failed or timed-out query is logged and treated as zero results for that
//! category. The lookup itself never fails because of the geodata service.

pub mod overpass;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::models::place::{PLACEHOLDER_RATING, PLACEHOLDER_WALK_TIME};
use crate::models::{Coordinate, Place, PlaceCategory, WidgetSnapshot};
use crate::store::LastResultStore;

use overpass::{OverpassClient, OverpassElement};

/// Search radius used when the caller does not give one, in meters.
pub const DEFAULT_RADIUS_M: u32 = 900;

/// Maximum number of places returned per category.
pub const MAX_PER_CATEGORY: usize = 5;

/// Address shown when the element has no street tags.
pub const UNKNOWN_ADDRESS: &str = "Dirección no disponible";

/// Input to [`find_nearby`].
#[derive(Debug, Clone)]
pub struct NearbyQuery {
    pub center: Coordinate,
    pub radius_m: u32,
    /// Echoed back, never used for filtering.
    pub mood: Option<String>,
    /// Restrict the lookup to one category. `None` queries both.
    pub category: Option<PlaceCategory>,
}

/// Response of `find_nearby_places`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyPlaces {
    pub places: Vec<Place>,
    pub message: String,
    pub radius_m: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

impl Place {
    /// Shape a raw element into a place. Elements without a position are dropped.
    pub fn from_element(category: PlaceCategory, element: &OverpassElement) -> Option<Self> {
        let position = element.position()?;
        Some(Self {
            id: element.source_id(),
            name: element
                .tag("name")
                .unwrap_or(category.default_name())
                .to_string(),
            category,
            lat: position.latitude,
            lng: position.longitude,
            address: address_of(element),
            rating: PLACEHOLDER_RATING,
            walk_time: PLACEHOLDER_WALK_TIME.to_string(),
        })
    }
}

fn address_of(element: &OverpassElement) -> String {
    match (element.tag("addr:street"), element.tag("addr:housenumber")) {
        (Some(street), Some(number)) => format!("{street} {number}"),
        (Some(street), None) => street.to_string(),
        _ => UNKNOWN_ADDRESS.to_string(),
    }
}

/// Shape elements of one category, keeping at most [`MAX_PER_CATEGORY`].
pub fn shape_category(category: PlaceCategory, elements: &[OverpassElement]) -> Vec<Place> {
    elements
        .iter()
        .filter_map(|el| Place::from_element(category, el))
        .take(MAX_PER_CATEGORY)
        .collect()
}

/// Human-readable summary of a lookup.
pub fn summary(count: usize) -> String {
    match count {
        0 => "No encontré lugares cerca, prueba con un radio mayor".to_string(),
        1 => "Encontré 1 lugar para tu pausa".to_string(),
        n => format!("Encontré {n} lugares para tu pausa"),
    }
}

async fn lookup_category(
    overpass: &OverpassClient,
    category: PlaceCategory,
    query: &NearbyQuery,
) -> Vec<Place> {
    if query.category.is_some_and(|only| only != category) {
        return Vec::new();
    }

    match overpass
        .fetch_category(category, query.center, query.radius_m)
        .await
    {
        Ok(elements) => {
            debug!(%category, raw = elements.len(), "overpass query succeeded");
            shape_category(category, &elements)
        }
        Err(e) => {
            warn!(%category, "overpass query failed, treating as empty: {e}");
            Vec::new()
        }
    }
}

/// Look up parks and cafés around `query.center` and publish them to the widget slot.
pub async fn find_nearby(
    overpass: &OverpassClient,
    store: &LastResultStore,
    query: &NearbyQuery,
) -> NearbyPlaces {
    let (parks, cafes) = tokio::join!(
        lookup_category(overpass, PlaceCategory::Park, query),
        lookup_category(overpass, PlaceCategory::QuietCafe, query),
    );

    info!(
        lat = query.center.latitude,
        lng = query.center.longitude,
        radius_m = query.radius_m,
        parks = parks.len(),
        cafes = cafes.len(),
        "nearby lookup finished"
    );

    let mut places = parks;
    places.extend(cafes);
    let message = summary(places.len());

    store
        .replace(WidgetSnapshot::with_places(
            "find_nearby_places",
            &message,
            places.clone(),
        ))
        .await;

    NearbyPlaces {
        places,
        message,
        radius_m: query.radius_m,
        mood: query.mood.clone(),
    }
}

#[cfg(test)]
mod tests;
