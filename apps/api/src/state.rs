use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Generation is stateless; only configuration is shared.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
}
