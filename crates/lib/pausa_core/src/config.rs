//! Service configuration.

use std::time::Duration;

/// Default address for the HTTP listener.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Public Overpass interpreter endpoint.
pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

/// Default timeout for a single Overpass request, in seconds.
pub const DEFAULT_OVERPASS_TIMEOUT_SECS: u64 = 25;

/// Base URL the widget is reachable at from the outside.
pub const DEFAULT_PUBLIC_URL: &str = "http://127.0.0.1:8000";

/// Configuration shared by the MCP server and the widget API.
#[derive(Clone, Debug)]
pub struct PausaConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8000").
    pub bind_addr: String,
    /// Overpass interpreter URL queried for parks and cafés.
    pub overpass_url: String,
    /// Per-request timeout for Overpass queries.
    pub overpass_timeout: Duration,
    /// Externally visible base URL, used to link the widget from tool results.
    pub public_url: String,
}

impl PausaConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                | Default                                   |
    /// |-------------------------|-------------------------------------------|
    /// | `PAUSA_BIND_ADDR`       | `127.0.0.1:8000`                          |
    /// | `OVERPASS_URL`          | `https://overpass-api.de/api/interpreter` |
    /// | `OVERPASS_TIMEOUT_SECS` | `25` (also when not a number)             |
    /// | `PAUSA_PUBLIC_URL`      | `http://127.0.0.1:8000`                   |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let timeout_secs = lookup("OVERPASS_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_OVERPASS_TIMEOUT_SECS);
        Self {
            bind_addr: lookup("PAUSA_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            overpass_url: lookup("OVERPASS_URL").unwrap_or_else(|| DEFAULT_OVERPASS_URL.into()),
            overpass_timeout: Duration::from_secs(timeout_secs),
            public_url: lookup("PAUSA_PUBLIC_URL").unwrap_or_else(|| DEFAULT_PUBLIC_URL.into()),
        }
    }

    /// URL of the map widget page.
    pub fn widget_url(&self) -> String {
        format!("{}/widget", self.public_url.trim_end_matches('/'))
    }

    /// User agent sent to Overpass. The public instances reject anonymous clients.
    pub fn user_agent(&self) -> String {
        format!("pausa/{}", crate::version())
    }
}

impl Default for PausaConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            overpass_url: DEFAULT_OVERPASS_URL.to_string(),
            overpass_timeout: Duration::from_secs(DEFAULT_OVERPASS_TIMEOUT_SECS),
            public_url: DEFAULT_PUBLIC_URL.to_string(),
        }
    }
}
