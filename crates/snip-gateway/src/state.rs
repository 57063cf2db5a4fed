use snip_core::TenantRegistry;
use snip_engine::Shortener;
use std::sync::Arc;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<dyn Shortener>,
    pub registry: Arc<TenantRegistry>,
}

impl AppState {
    pub fn new(shortener: Arc<dyn Shortener>, registry: TenantRegistry) -> Self {
        Self {
            shortener,
            registry: Arc::new(registry),
        }
    }
}
