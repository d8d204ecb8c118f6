// @zen-component: WGT-LastResultStore
//
//! Single-slot store for the last widget payload.
//!
//! There is no key and no expiry. Every tool call that produces map data
//! replaces the slot; when two calls race, the later write wins. The slot is
//! display state only, consumers that need a specific result should read it
//! from the tool response instead.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::models::WidgetSnapshot;

/// Shared handle to the last-result slot. Cloning shares the slot.
#[derive(Debug, Clone, Default)]
pub struct LastResultStore {
    slot: Arc<RwLock<Option<WidgetSnapshot>>>,
}

impl LastResultStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the slot.
    pub async fn replace(&self, snapshot: WidgetSnapshot) {
        *self.slot.write().await = Some(snapshot);
    }

    /// Current snapshot, if any tool has produced one.
    pub async fn latest(&self) -> Option<WidgetSnapshot> {
        self.slot.read().await.clone()
    }

    /// When the slot was last written.
    pub async fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.slot.read().await.as_ref().map(|s| s.updated_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoutePoint;

    #[tokio::test]
    async fn starts_empty() {
        let store = LastResultStore::new();
        assert!(store.latest().await.is_none());
        assert!(store.updated_at().await.is_none());
    }

    #[tokio::test]
    async fn last_writer_wins() {
        let store = LastResultStore::new();
        store
            .replace(WidgetSnapshot::with_places("find_nearby_places", "first", vec![]))
            .await;
        store
            .replace(WidgetSnapshot::with_route(
                "generate_walk_route",
                "second",
                vec![RoutePoint { lat: 1.0, lng: 2.0 }],
            ))
            .await;

        let latest = store.latest().await.expect("snapshot");
        assert_eq!(latest.message, "second");
        assert_eq!(latest.source, "generate_walk_route");
        assert!(latest.places.is_empty());
        assert_eq!(store.updated_at().await, Some(latest.updated_at));
    }

    #[tokio::test]
    async fn clones_share_the_slot() {
        let store = LastResultStore::new();
        let other = store.clone();
        other
            .replace(WidgetSnapshot::with_places("find_nearby_places", "shared", vec![]))
            .await;
        assert_eq!(store.latest().await.map(|s| s.message).as_deref(), Some("shared"));
    }
}
