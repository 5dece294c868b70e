use std::sync::Arc;

use crate::config::Config;
use crate::embeds::Embed;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    /// Third-party embeds resolved once at startup.
    pub embeds: Arc<Vec<Embed>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let embeds = crate::embeds::build_embeds(&config);
        Self {
            config,
            sessions: SessionStore::new(),
            embeds: Arc::new(embeds),
        }
    }
}
