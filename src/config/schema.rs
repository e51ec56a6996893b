//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Client configuration: where the backend lives and where the app is
/// mounted. Read-only after construction.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Server origin, e.g. "http://127.0.0.1:5000". In the browser build
    /// this was the page's own origin; here it must be configured.
    pub origin: String,

    /// Common prefix for the JSON API endpoints.
    pub api_base: String,

    /// History-mode base path the router is mounted under.
    pub router_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: String::new(),
            api_base: "/api".to_string(),
            router_base: "/".to_string(),
        }
    }
}
