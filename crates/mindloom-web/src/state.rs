use crate::config::ServerConfig;

/// Application state shared across all requests
///
/// The pipeline itself is stateless, so the only shared data is the
/// immutable configuration.
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ServerConfig::from_env(),
        }
    }

    #[must_use]
    pub fn with_config(config: ServerConfig) -> Self {
        Self { config }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
