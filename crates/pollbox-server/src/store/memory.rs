//! In-process counter store for tests and local runs without Redis.

use async_trait::async_trait;
use dashmap::DashMap;
use pollbox_core::Result;

use super::CounterStore;

#[derive(Default)]
pub struct MemoryStore {
    map: DashMap<String, i64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CounterStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<i64>> {
        Ok(self.map.get(key).map(|v| *v))
    }

    async fn set(&self, key: &str, value: i64) -> Result<()> {
        self.map.insert(key.to_string(), value);
        Ok(())
    }

    async fn incr(&self, key: &str, delta: i64) -> Result<i64> {
        // Entry guard holds the shard lock across the read-modify-write.
        let mut entry = self.map.entry(key.to_string()).or_insert(0);
        *entry += delta;
        Ok(*entry)
    }
}
