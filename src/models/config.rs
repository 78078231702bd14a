//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Glob handed to Tera, e.g. `templates/**/*`.
    pub templates_dir: String,
    /// Session cookie signing key; at least 64 bytes.
    pub secret: String,
    /// Optional CSV file with clients; the demo list is served when unset.
    #[serde(default)]
    pub clients_csv: Option<String>,
}
