use async_trait::async_trait;
use dashmap::DashMap;
use snip_core::error::Result;
use snip_core::KvStore;

/// In-memory implementation of [`KvStore`] backed by a `DashMap`.
///
/// DashMap shards its locks, so concurrent requests touching different
/// keys do not contend. Entries persist for the lifetime of the process;
/// there is no expiry, matching the store contract.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: DashMap<String, String>,
}

impl InMemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl KvStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn set_nx(&self, key: &str, value: &str) -> Result<bool> {
        // The entry API holds the shard lock across the check and the
        // insert, giving the same first-writer-wins guarantee as SETNX.
        let mut created = false;
        self.entries.entry(key.to_owned()).or_insert_with(|| {
            created = true;
            value.to_owned()
        });
        Ok(created)
    }
}
