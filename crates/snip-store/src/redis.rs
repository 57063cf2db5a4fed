use async_trait::async_trait;
use redis::AsyncCommands;
use snip_core::error::Result;
use snip_core::{KvStore, StoreError};
use tracing::{trace, warn};

/// A Redis-backed implementation of [`KvStore`].
///
/// The multiplexed connection is shared across all concurrent requests;
/// it is cheap to clone, and each operation clones it for the duration
/// of one round trip.
#[derive(Debug, Clone)]
pub struct RedisStore {
    conn: redis::aio::MultiplexedConnection,
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> StoreError {
    let message = format!("{operation}: {err}");
    if err.is_timeout() || message.to_ascii_lowercase().contains("timed out") {
        StoreError::Timeout(message)
    } else if err.is_connection_refusal() || err.is_connection_dropped() {
        StoreError::Unavailable(message)
    } else {
        StoreError::Operation(message)
    }
}

impl RedisStore {
    /// Creates a store over an existing multiplexed connection.
    pub fn new(conn: redis::aio::MultiplexedConnection) -> Self {
        Self { conn }
    }

    /// Opens a client for `redis_url` and establishes a multiplexed
    /// connection.
    pub async fn connect(redis_url: &str) -> Result<Self> {
        let client = redis::Client::open(redis_url)
            .map_err(|e| StoreError::Unavailable(format!("invalid redis url: {e}")))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| map_redis_error("failed to connect to redis", e))?;
        Ok(Self::new(conn))
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        trace!(key, "fetching value from redis");

        let mut conn = self.conn.clone();
        match conn.get::<_, Option<String>>(key).await {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(key, error = %e, "redis error on get");
                Err(map_redis_error("failed to fetch value from redis", e))
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        trace!(key, "storing value in redis");

        let mut conn = self.conn.clone();
        match conn.set::<_, _, ()>(key, value).await {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!(key, error = %e, "redis error on set");
                Err(map_redis_error("failed to write value to redis", e))
            }
        }
    }

    async fn set_nx(&self, key: &str, value: &str) -> Result<bool> {
        trace!(key, "claiming key in redis");

        let mut conn = self.conn.clone();
        match conn.set_nx::<_, _, bool>(key, value).await {
            Ok(created) => Ok(created),
            Err(e) => {
                warn!(key, error = %e, "redis error on set_nx");
                Err(map_redis_error("failed to claim key in redis", e))
            }
        }
    }
}
