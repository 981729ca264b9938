//! Redis-backed counter store.
//!
//! Connection handling follows the managed-connection pattern: one
//! `ConnectionManager` shared by all requests, cloned per command (clones
//! share the underlying multiplexed connection). Connect and response
//! timeouts are bounded so a dead store fails requests instead of hanging
//! them.

use std::time::Duration;

use async_trait::async_trait;
use pollbox_core::error::{PollError, Result};
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{AsyncCommands, Client};

use super::CounterStore;

#[derive(Clone)]
pub struct RedisStore {
    manager: ConnectionManager,
}

impl RedisStore {
    pub async fn connect(url: &str, timeout: Duration) -> Result<Self> {
        let config = ConnectionManagerConfig::new()
            .set_number_of_retries(1)
            .set_connection_timeout(Some(timeout))
            .set_response_timeout(Some(timeout));

        let client =
            Client::open(url).map_err(|e| PollError::Config(format!("invalid redis url: {e}")))?;
        let manager = client
            .get_connection_manager_with_config(config)
            .await
            .map_err(store_err)?;

        Ok(Self { manager })
    }
}

#[async_trait]
impl CounterStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<i64>> {
        let mut conn = self.manager.clone();
        conn.get(key).await.map_err(store_err)
    }

    async fn set(&self, key: &str, value: i64) -> Result<()> {
        let mut conn = self.manager.clone();
        conn.set::<_, _, ()>(key, value).await.map_err(store_err)?;
        Ok(())
    }

    async fn incr(&self, key: &str, delta: i64) -> Result<i64> {
        let mut conn = self.manager.clone();
        conn.incr(key, delta).await.map_err(store_err)
    }
}

fn store_err(e: redis::RedisError) -> PollError {
    PollError::StoreUnavailable(e.to_string())
}
