use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Content lives in `'static` tables, so the state only carries configuration.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
