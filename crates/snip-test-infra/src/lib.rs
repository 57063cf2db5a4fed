//! Test infrastructure for snip integration tests.
//!
//! Provides a containerized Redis instance so store integration tests
//! can run against the real backend.

pub mod error;
pub mod redis;

pub use error::{Result, TestInfraError};
pub use redis::RedisServer;
