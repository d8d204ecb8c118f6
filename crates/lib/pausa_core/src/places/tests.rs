// @zen-component: PLC-NearbyLookupTests

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::{Value, json};
    use wiremock::matchers::{body_string_contains, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::PausaConfig;
    use crate::models::{Coordinate, PlaceCategory};
    use crate::places::overpass::{OverpassClient, OverpassElement};
    use crate::places::{
        DEFAULT_RADIUS_M, MAX_PER_CATEGORY, NearbyQuery, UNKNOWN_ADDRESS, find_nearby,
        shape_category, summary,
    };
    use crate::store::LastResultStore;

    fn parks(count: i64) -> Value {
        let elements: Vec<Value> = (0..count)
            .map(|i| {
                json!({
                    "type": "way",
                    "id": 100 + i,
                    "center": {"lat": 40.0 + i as f64 * 0.001, "lon": -3.0},
                    "tags": {"leisure": "park", "name": format!("Parque {i}")}
                })
            })
            .collect();
        json!({ "elements": elements })
    }

    fn cafes(count: i64) -> Value {
        let elements: Vec<Value> = (0..count)
            .map(|i| {
                json!({
                    "type": "node",
                    "id": 200 + i,
                    "lat": 40.0,
                    "lon": -3.0 + i as f64 * 0.001,
                    "tags": {"amenity": "cafe"}
                })
            })
            .collect();
        json!({ "elements": elements })
    }

    fn query() -> NearbyQuery {
        NearbyQuery {
            center: Coordinate::new(40.0, -3.0),
            radius_m: DEFAULT_RADIUS_M,
            mood: Some("Necesito calma".into()),
            category: None,
        }
    }

    fn client_for(server: &MockServer) -> OverpassClient {
        let config = PausaConfig {
            overpass_url: server.uri(),
            overpass_timeout: Duration::from_millis(300),
            ..Default::default()
        };
        OverpassClient::new(&config).expect("client")
    }

    async fn mount(server: &MockServer, marker: &str, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(body_string_contains(marker))
            .respond_with(response)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn caps_each_category_at_five() {
        let server = MockServer::start().await;
        mount(&server, "leisure", ResponseTemplate::new(200).set_body_json(parks(8))).await;
        mount(&server, "amenity", ResponseTemplate::new(200).set_body_json(cafes(7))).await;

        let result = find_nearby(&client_for(&server), &LastResultStore::new(), &query()).await;

        let park_count = result
            .places
            .iter()
            .filter(|p| p.category == PlaceCategory::Park)
            .count();
        let cafe_count = result.places.len() - park_count;
        assert_eq!(park_count, MAX_PER_CATEGORY);
        assert_eq!(cafe_count, MAX_PER_CATEGORY);
        assert_eq!(result.message, "Encontré 10 lugares para tu pausa");
        assert_eq!(result.mood.as_deref(), Some("Necesito calma"));
    }

    #[tokio::test]
    async fn parks_come_before_cafes_and_keep_response_order() {
        let server = MockServer::start().await;
        mount(&server, "leisure", ResponseTemplate::new(200).set_body_json(parks(2))).await;
        mount(&server, "amenity", ResponseTemplate::new(200).set_body_json(cafes(1))).await;

        let result = find_nearby(&client_for(&server), &LastResultStore::new(), &query()).await;
        let ids: Vec<&str> = result.places.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["way/100", "way/101", "node/200"]);
    }

    #[tokio::test]
    async fn failed_park_query_yields_only_cafes() {
        let server = MockServer::start().await;
        mount(&server, "leisure", ResponseTemplate::new(504).set_body_string("timeout")).await;
        mount(&server, "amenity", ResponseTemplate::new(200).set_body_json(cafes(2))).await;

        let result = find_nearby(&client_for(&server), &LastResultStore::new(), &query()).await;

        assert_eq!(result.places.len(), 2);
        assert!(result.places.iter().all(|p| p.category == PlaceCategory::QuietCafe));
    }

    #[tokio::test]
    async fn timed_out_cafe_query_yields_only_parks() {
        let server = MockServer::start().await;
        mount(&server, "leisure", ResponseTemplate::new(200).set_body_json(parks(3))).await;
        mount(
            &server,
            "amenity",
            ResponseTemplate::new(200)
                .set_body_json(cafes(3))
                .set_delay(Duration::from_secs(2)),
        )
        .await;

        let result = find_nearby(&client_for(&server), &LastResultStore::new(), &query()).await;

        assert_eq!(result.places.len(), 3);
        assert!(result.places.iter().all(|p| p.category == PlaceCategory::Park));
    }

    #[tokio::test]
    async fn unreachable_service_returns_empty_result() {
        let config = PausaConfig {
            // Nothing listens on port 9 locally.
            overpass_url: "http://127.0.0.1:9/api/interpreter".into(),
            overpass_timeout: Duration::from_millis(300),
            ..Default::default()
        };
        let overpass = OverpassClient::new(&config).expect("client");

        let result = find_nearby(&overpass, &LastResultStore::new(), &query()).await;

        assert!(result.places.is_empty());
        assert_eq!(result.message, summary(0));
    }

    #[tokio::test]
    async fn category_filter_skips_the_other_query() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("leisure"))
            .respond_with(ResponseTemplate::new(200).set_body_json(parks(2)))
            .expect(0)
            .mount(&server)
            .await;
        mount(&server, "amenity", ResponseTemplate::new(200).set_body_json(cafes(2))).await;

        let mut q = query();
        q.category = Some(PlaceCategory::QuietCafe);
        let result = find_nearby(&client_for(&server), &LastResultStore::new(), &q).await;

        assert_eq!(result.places.len(), 2);
        server.verify().await;
    }

    #[tokio::test]
    async fn lookup_overwrites_widget_snapshot() {
        let server = MockServer::start().await;
        mount(&server, "leisure", ResponseTemplate::new(200).set_body_json(parks(1))).await;
        mount(&server, "amenity", ResponseTemplate::new(200).set_body_json(cafes(1))).await;
        let store = LastResultStore::new();

        let result = find_nearby(&client_for(&server), &store, &query()).await;

        let snapshot = store.latest().await.expect("snapshot");
        assert_eq!(snapshot.source, "find_nearby_places");
        assert_eq!(snapshot.places, result.places);
        assert_eq!(snapshot.message, result.message);
    }

    #[test]
    fn untagged_records_get_category_default_name() {
        let elements: Vec<OverpassElement> = serde_json::from_value(json!([
            {"type": "node", "id": 1, "lat": 1.0, "lon": 2.0},
            {"type": "node", "id": 2, "lat": 1.0, "lon": 2.0, "tags": {"name": "  "}}
        ]))
        .expect("elements");

        let cafes = shape_category(PlaceCategory::QuietCafe, &elements);
        assert!(cafes.iter().all(|p| p.name == "Café tranquilo"));

        let parks = shape_category(PlaceCategory::Park, &elements);
        assert!(parks.iter().all(|p| p.name == "Parque cercano"));
    }

    #[test]
    fn area_uses_center_and_point_uses_own_coordinate() {
        let elements: Vec<OverpassElement> = serde_json::from_value(json!([
            {"type": "relation", "id": 5, "center": {"lat": 10.0, "lon": 20.0}, "lat": 99.0, "lon": 99.0},
            {"type": "node", "id": 6, "lat": 11.0, "lon": 21.0}
        ]))
        .expect("elements");

        let places = shape_category(PlaceCategory::Park, &elements);
        assert_eq!((places[0].lat, places[0].lng), (10.0, 20.0));
        assert_eq!((places[1].lat, places[1].lng), (11.0, 21.0));
    }

    #[test]
    fn elements_without_position_are_dropped_before_capping() {
        let mut raw = vec![json!({"type": "way", "id": 0})];
        raw.extend((1..=5).map(|i| json!({"type": "node", "id": i, "lat": 0.0, "lon": 0.0})));
        let elements: Vec<OverpassElement> =
            serde_json::from_value(Value::Array(raw)).expect("elements");

        let places = shape_category(PlaceCategory::QuietCafe, &elements);
        assert_eq!(places.len(), 5);
        assert!(places.iter().all(|p| p.id.starts_with("node/")));
    }

    #[test]
    fn address_comes_from_street_tags() {
        let elements: Vec<OverpassElement> = serde_json::from_value(json!([
            {"type": "node", "id": 1, "lat": 0.0, "lon": 0.0,
             "tags": {"addr:street": "Calle Mayor", "addr:housenumber": "12"}},
            {"type": "node", "id": 2, "lat": 0.0, "lon": 0.0,
             "tags": {"addr:street": "Calle Mayor"}},
            {"type": "node", "id": 3, "lat": 0.0, "lon": 0.0}
        ]))
        .expect("elements");

        let places = shape_category(PlaceCategory::QuietCafe, &elements);
        assert_eq!(places[0].address, "Calle Mayor 12");
        assert_eq!(places[1].address, "Calle Mayor");
        assert_eq!(places[2].address, UNKNOWN_ADDRESS);
    }

    #[test]
    fn summary_handles_singular_and_empty() {
        assert_eq!(summary(1), "Encontré 1 lugar para tu pausa");
        assert!(summary(0).starts_with("No encontré"));
    }
}
