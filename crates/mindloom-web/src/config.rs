use serde::{Deserialize, Serialize};

/// Port 6277 - MAPS on a phone keypad
const DEFAULT_PORT: u16 = 6277;

const MIN_NODES: usize = 5;
const MAX_NODES: usize = 20;
const DEFAULT_NODES: usize = 10;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    /// Smallest node budget the UI offers
    pub min_nodes: usize,
    /// Largest node budget the UI offers
    pub max_nodes: usize,
    /// Budget used when a request does not ask for one
    pub default_nodes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            min_nodes: MIN_NODES,
            max_nodes: MAX_NODES,
            default_nodes: DEFAULT_NODES,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            port: env_parsed("MINDLOOM_PORT", DEFAULT_PORT),
            min_nodes: env_parsed("MINDLOOM_MIN_NODES", MIN_NODES),
            max_nodes: env_parsed("MINDLOOM_MAX_NODES", MAX_NODES),
            default_nodes: env_parsed("MINDLOOM_DEFAULT_NODES", DEFAULT_NODES),
        }
    }

    /// Clamp a requested node budget into the configured range.
    #[must_use]
    pub fn clamp_nodes(&self, requested: Option<usize>) -> usize {
        requested.map_or(self.default_nodes, |n| {
            n.clamp(self.min_nodes, self.max_nodes)
        })
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
