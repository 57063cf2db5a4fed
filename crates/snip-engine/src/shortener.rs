use crate::error::Result;
use async_trait::async_trait;
use snip_core::{Application, ShortCode};

/// The mapping engine's request-facing contract.
///
/// The gateway holds this as a trait object so handlers stay independent
/// of the store and generator types behind the service.
#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Returns the identifier mapped to `uri` for this tenant, creating
    /// the mapping if none exists yet. Repeated calls with the same
    /// (tenant, uri) pair return the same identifier.
    async fn shorten(&self, app: &Application, uri: &str) -> Result<ShortCode>;

    /// Resolves an identifier to its original URI.
    ///
    /// Returns `Ok(None)` if the tenant has no mapping for `code`; an
    /// `Err` always means the store failed.
    async fn resolve(&self, app: &Application, code: &str) -> Result<Option<String>>;
}
