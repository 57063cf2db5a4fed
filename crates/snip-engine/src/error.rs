use snip_core::StoreError;
use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// The URI failed validation before any store traffic.
    #[error("invalid uri: {0}")]
    InvalidUri(String),
    /// The allocator used up its retry budget without finding an unused
    /// identifier.
    #[error("no unused identifier found after {attempts} attempts")]
    KeyspaceExhausted { attempts: usize },
    /// A reverse-entry claim was lost but the winning entry could not be
    /// read back.
    #[error("mapping inconsistency: {0}")]
    Inconsistent(String),
    /// The underlying store failed; propagated unchanged in kind.
    #[error(transparent)]
    Store(#[from] StoreError),
}
