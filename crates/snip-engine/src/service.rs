use crate::allocator::Allocator;
use crate::error::{EngineError, Result};
use crate::generator::CodeGenerator;
use crate::shortener::Shortener;
use async_trait::async_trait;
use snip_core::{forward_key, reverse_key, Application, KvStore, ShortCode};
use std::sync::Arc;
use tracing::{debug, trace};

/// A concrete implementation of the [`Shortener`] trait.
///
/// This service wraps a [`KvStore`] and an [`Allocator`] to maintain the
/// two entries backing every mapping: the forward entry used by resolve
/// and the reverse entry that makes shortening idempotent.
///
/// The reverse entry is claimed with an atomic set-if-absent, so
/// concurrent first-time shortens of the same URI converge on a single
/// identifier; the losing writer's forward entry survives as an orphan
/// that resolves by its own code but is never handed out again.
#[derive(Debug, Clone)]
pub struct ShortenerService<S, G> {
    store: Arc<S>,
    allocator: Allocator<S, G>,
}

impl<S: KvStore, G: CodeGenerator> ShortenerService<S, G> {
    /// Creates a new service owning its store.
    pub fn new(store: S, generator: G) -> Self {
        Self::with_store(Arc::new(store), generator)
    }

    /// Creates a new service over a shared store handle.
    pub fn with_store(store: Arc<S>, generator: G) -> Self {
        let allocator = Allocator::builder()
            .store(Arc::clone(&store))
            .generator(generator)
            .build();
        Self { store, allocator }
    }
}

#[async_trait]
impl<S: KvStore, G: CodeGenerator> Shortener for ShortenerService<S, G> {
    async fn shorten(&self, app: &Application, uri: &str) -> Result<ShortCode> {
        if uri.is_empty() {
            return Err(EngineError::InvalidUri("uri cannot be empty".to_string()));
        }

        // Idempotent fast path: an existing reverse entry wins without
        // any allocation or writes.
        let rkey = reverse_key(&app.id, uri);
        if let Some(existing) = self.store.get(&rkey).await? {
            trace!(tenant = %app.id, code = %existing, "uri already shortened");
            return Ok(ShortCode::new(existing));
        }

        let code = self.allocator.allocate(app).await?;

        // Forward entry first so the identifier resolves as soon as the
        // reverse claim lands.
        let fkey = forward_key(&app.id, code.as_str());
        self.store.set(&fkey, uri).await?;

        if self.store.set_nx(&rkey, code.as_str()).await? {
            debug!(tenant = %app.id, code = %code, "shortened uri");
            return Ok(code);
        }

        // Another writer claimed the reverse entry between our lookup
        // and the claim. Hand out the winning identifier; our forward
        // entry stays behind as a resolvable orphan.
        match self.store.get(&rkey).await? {
            Some(winner) => {
                debug!(tenant = %app.id, code = %winner, "lost reverse claim, returning winner");
                Ok(ShortCode::new(winner))
            }
            None => Err(EngineError::Inconsistent(format!(
                "reverse entry for tenant '{}' was claimed but cannot be read back",
                app.id
            ))),
        }
    }

    async fn resolve(&self, app: &Application, code: &str) -> Result<Option<String>> {
        trace!(tenant = %app.id, code, "resolving identifier");
        Ok(self.store.get(&forward_key(&app.id, code)).await?)
    }
}
