use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Live editing sessions, one owned `Resume` each.
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let sessions = Arc::new(SessionStore::new(
            config.max_sessions,
            Duration::from_secs(config.session_idle_secs),
        ));
        AppState { config, sessions }
    }
}
