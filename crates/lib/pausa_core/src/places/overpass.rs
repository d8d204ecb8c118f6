// @zen-component: PLC-OverpassClient
//
//! Overpass API client.
//!
//! Sends Overpass QL to the interpreter endpoint as the `data` form field and
//! decodes the `[out:json]` element list.

use std::collections::HashMap;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::config::PausaConfig;
use crate::models::{Coordinate, PlaceCategory};

/// Errors talking to Overpass.
#[derive(Debug, Error)]
pub enum OverpassError {
    #[error("Invalid Overpass endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Overpass request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Overpass returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Overpass response parse error: {0}")]
    Parse(String),
}

/// OSM element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Way,
    Relation,
    #[serde(other)]
    Other,
}

impl ElementKind {
    fn as_str(self) -> &'static str {
        match self {
            ElementKind::Node => "node",
            ElementKind::Way => "way",
            ElementKind::Relation => "relation",
            ElementKind::Other => "element",
        }
    }
}

/// Center point Overpass attaches to areas with `out center`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ElementCenter {
    pub lat: f64,
    pub lon: f64,
}

/// A raw element from an Overpass `[out:json]` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OverpassElement {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub id: i64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub center: Option<ElementCenter>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl OverpassElement {
    /// `"<type>/<id>"`, unique across element types.
    pub fn source_id(&self) -> String {
        format!("{}/{}", self.kind.as_str(), self.id)
    }

    /// Points use their own coordinate, areas their center.
    pub fn position(&self) -> Option<Coordinate> {
        match self.kind {
            ElementKind::Node => Some(Coordinate::new(self.lat?, self.lon?)),
            ElementKind::Way | ElementKind::Relation => {
                self.center.map(|c| Coordinate::new(c.lat, c.lon))
            }
            ElementKind::Other => None,
        }
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

/// Build the Overpass QL query for one category around `center`.
pub fn category_query(
    category: PlaceCategory,
    center: Coordinate,
    radius_m: u32,
    timeout_secs: u64,
) -> String {
    let around = format!(
        "(around:{radius_m},{},{})",
        center.latitude, center.longitude
    );
    match category {
        PlaceCategory::Park => format!(
            "[out:json][timeout:{timeout_secs}];\
             (way[\"leisure\"=\"park\"]{around};relation[\"leisure\"=\"park\"]{around};);\
             out center;"
        ),
        PlaceCategory::QuietCafe => format!(
            "[out:json][timeout:{timeout_secs}];\
             node[\"amenity\"=\"cafe\"]{around};\
             out;"
        ),
    }
}

/// Thin client around the Overpass interpreter endpoint.
#[derive(Debug, Clone)]
pub struct OverpassClient {
    client: Client,
    endpoint: Url,
    timeout_secs: u64,
}

impl OverpassClient {
    /// Build a client from service configuration.
    pub fn new(config: &PausaConfig) -> Result<Self, OverpassError> {
        let endpoint = Url::parse(&config.overpass_url)
            .map_err(|e| OverpassError::InvalidEndpoint(format!("{}: {e}", config.overpass_url)))?;
        let client = Client::builder()
            .timeout(config.overpass_timeout)
            .user_agent(config.user_agent())
            .build()?;
        Ok(Self {
            client,
            endpoint,
            timeout_secs: config.overpass_timeout.as_secs().max(1),
        })
    }

    /// Query one category around `center`.
    pub async fn fetch_category(
        &self,
        category: PlaceCategory,
        center: Coordinate,
        radius_m: u32,
    ) -> Result<Vec<OverpassElement>, OverpassError> {
        let query = category_query(category, center, radius_m, self.timeout_secs);
        self.query(&query).await
    }

    /// Run a raw Overpass QL query.
    pub async fn query(&self, query: &str) -> Result<Vec<OverpassElement>, OverpassError> {
        let resp = self
            .client
            .post(self.endpoint.clone())
            .form(&[("data", query)])
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(OverpassError::Status { status, body });
        }

        let data: OverpassResponse = resp
            .json()
            .await
            .map_err(|e| OverpassError::Parse(e.to_string()))?;

        Ok(data.elements)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> OverpassClient {
        let config = PausaConfig {
            overpass_url: format!("{}/api/interpreter", server.uri()),
            overpass_timeout: Duration::from_millis(500),
            ..Default::default()
        };
        OverpassClient::new(&config).expect("client")
    }

    #[test]
    fn park_query_asks_for_area_centers() {
        let q = category_query(PlaceCategory::Park, Coordinate::new(40.5, -3.25), 900, 25);
        assert!(q.starts_with("[out:json][timeout:25];"));
        assert!(q.contains("way[\"leisure\"=\"park\"](around:900,40.5,-3.25)"));
        assert!(q.contains("relation[\"leisure\"=\"park\"](around:900,40.5,-3.25)"));
        assert!(q.ends_with("out center;"));
    }

    #[test]
    fn cafe_query_asks_for_nodes() {
        let q = category_query(PlaceCategory::QuietCafe, Coordinate::new(1.0, 2.0), 300, 10);
        assert!(q.contains("node[\"amenity\"=\"cafe\"](around:300,1,2)"));
    }

    #[test]
    fn rejects_invalid_endpoint() {
        let config = PausaConfig {
            overpass_url: "not a url".into(),
            ..Default::default()
        };
        let err = OverpassClient::new(&config).unwrap_err();
        assert!(matches!(err, OverpassError::InvalidEndpoint(_)));
    }

    #[test]
    fn node_uses_own_position_and_area_uses_center() {
        let node: OverpassElement = serde_json::from_value(json!({
            "type": "node", "id": 7, "lat": 1.5, "lon": 2.5
        }))
        .expect("node");
        let way: OverpassElement = serde_json::from_value(json!({
            "type": "way", "id": 8, "center": {"lat": 3.5, "lon": 4.5}, "tags": {}
        }))
        .expect("way");
        let bare_way: OverpassElement = serde_json::from_value(json!({
            "type": "way", "id": 9
        }))
        .expect("bare way");

        assert_eq!(node.position(), Some(Coordinate::new(1.5, 2.5)));
        assert_eq!(way.position(), Some(Coordinate::new(3.5, 4.5)));
        assert_eq!(bare_way.position(), None);
        assert_eq!(way.source_id(), "way/8");
    }

    #[test]
    fn unknown_element_type_decodes_as_other() {
        let el: OverpassElement = serde_json::from_value(json!({
            "type": "area", "id": 1, "lat": 0.0, "lon": 0.0
        }))
        .expect("area");
        assert_eq!(el.kind, ElementKind::Other);
        assert_eq!(el.position(), None);
    }

    #[tokio::test]
    async fn query_posts_form_and_decodes_elements() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/interpreter"))
            .and(body_string_contains("data="))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "version": 0.6,
                "elements": [
                    {"type": "node", "id": 1, "lat": 40.0, "lon": -3.0, "tags": {"name": "Café Uno"}}
                ]
            })))
            .mount(&server)
            .await;

        let elements = client_for(&server)
            .fetch_category(PlaceCategory::QuietCafe, Coordinate::new(40.0, -3.0), 900)
            .await
            .expect("elements");

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].tag("name"), Some("Café Uno"));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .query("[out:json];out;")
            .await
            .unwrap_err();

        match err {
            OverpassError::Status { status, body } => {
                assert_eq!(status.as_u16(), 429);
                assert_eq!(body, "rate limited");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).query("[out:json];out;").await.unwrap_err();
        assert!(matches!(err, OverpassError::Parse(_)));
    }
}
