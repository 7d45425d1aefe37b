use std::sync::atomic::{AtomicU64, Ordering};

use redis::AsyncCommands;
use tracing::debug;

/// Best-effort request counter.
///
/// Increments a Redis key when a client is configured; otherwise (or when
/// Redis is unreachable) falls back to an in-process atomic. The count is not
/// a correctness-relevant resource, so every failure path degrades silently.
pub struct HitCounter {
    redis: Option<redis::Client>,
    local: AtomicU64,
}

impl HitCounter {
    pub fn new(redis: Option<redis::Client>) -> Self {
        Self {
            redis,
            local: AtomicU64::new(0),
        }
    }

    /// Increments the counter under `key` and returns the new total.
    pub async fn hit(&self, key: &str) -> u64 {
        if let Some(client) = &self.redis {
            match incr_redis(client, key).await {
                Ok(n) => return n,
                Err(e) => debug!("Redis counter unavailable, using local fallback: {e}"),
            }
        }
        self.local.fetch_add(1, Ordering::Relaxed) + 1
    }
}

async fn incr_redis(client: &redis::Client, key: &str) -> redis::RedisResult<u64> {
    let mut conn = client.get_multiplexed_async_connection().await?;
    conn.incr(key, 1).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_counter_increments() {
        let counter = HitCounter::new(None);
        assert_eq!(counter.hit("hits:ping").await, 1);
        assert_eq!(counter.hit("hits:ping").await, 2);
        assert_eq!(counter.hit("hits:ping").await, 3);
    }
}
