use crate::error::{EngineError, Result};
use crate::generator::CodeGenerator;
use snip_core::{forward_key, Application, KvStore, ShortCode};
use std::sync::Arc;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

/// Default bound on collision retries before allocation gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 64;

/// Allocates unused identifiers within a tenant's namespace.
///
/// Candidates come from the injected generator; each one is checked
/// against the tenant's forward entries and retried on collision, at
/// most `max_attempts` times. A tenant whose keyspace has filled up to
/// the point of exhausting the budget gets an error instead of an
/// unbounded loop.
#[derive(Debug, Clone, TypedBuilder)]
pub struct Allocator<S, G> {
    store: Arc<S>,
    generator: G,
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,
}

impl<S: KvStore, G: CodeGenerator> Allocator<S, G> {
    /// Returns an identifier that had no forward entry for this tenant
    /// at the moment its existence check succeeded.
    ///
    /// The check and the caller's subsequent write are not atomic;
    /// uniqueness under concurrency relies on the keyspace being far
    /// larger than the record count. Store failures abort immediately,
    /// the retry budget only covers observed collisions.
    pub async fn allocate(&self, app: &Application) -> Result<ShortCode> {
        for attempt in 1..=self.max_attempts {
            let candidate = self.generator.generate(&app.characters, app.max_length);
            trace!(tenant = %app.id, candidate = %candidate, attempt, "checking candidate identifier");

            let key = forward_key(&app.id, candidate.as_str());
            if self.store.get(&key).await?.is_none() {
                return Ok(candidate);
            }

            debug!(tenant = %app.id, candidate = %candidate, attempt, "identifier collision, retrying");
        }

        Err(EngineError::KeyspaceExhausted {
            attempts: self.max_attempts,
        })
    }
}
