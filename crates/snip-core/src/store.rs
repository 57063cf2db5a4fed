use crate::error::Result;
use async_trait::async_trait;

/// Minimal capability interface over the backing key-value store.
///
/// The engine never reaches for the store through an ambient handle; an
/// implementation of this trait is injected at construction, so the core
/// is testable against an in-memory fake.
///
/// Callers cannot conflate "absent" with "failed": absence is `Ok(None)`,
/// an `Err` is always a store fault.
#[async_trait]
pub trait KvStore: Send + Sync + 'static {
    /// Retrieves the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Unconditionally stores `value` under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Stores `value` under `key` only if the key does not exist yet.
    ///
    /// Returns `true` iff this call created the entry. This is the only
    /// atomic primitive the engine relies on; it backs the reverse-entry
    /// claim that keeps concurrent first-time shortens of the same URI
    /// convergent on a single identifier.
    async fn set_nx(&self, key: &str, value: &str) -> Result<bool>;
}
