//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::InMemoryRegistry;

/// Service type wired into the HTTP layer.
pub type AppLinkService = LinkService<InMemoryRegistry>;

/// Default number of links returned by `GET /api/recent`.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    /// Number of links returned by the recent listing when no `limit` is given.
    pub recent_limit: usize,
}

impl AppState {
    pub fn new(link_service: Arc<AppLinkService>, recent_limit: usize) -> Self {
        Self {
            link_service,
            recent_limit,
        }
    }

    /// Builds state around a fresh registry.
    pub fn in_memory(registry: InMemoryRegistry, base_url: &str) -> Self {
        let link_service = LinkService::new(Arc::new(registry), base_url);
        Self::new(Arc::new(link_service), DEFAULT_RECENT_LIMIT)
    }
}
