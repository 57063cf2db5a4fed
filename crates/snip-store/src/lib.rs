//! Key-value store implementations for the snip URL shortener.
//!
//! Two implementations of the [`snip_core::KvStore`] capability are
//! provided: [`RedisStore`] for production and [`InMemoryStore`] for
//! tests and local development.

pub mod memory;
pub mod redis;

pub use memory::InMemoryStore;
pub use redis::RedisStore;
