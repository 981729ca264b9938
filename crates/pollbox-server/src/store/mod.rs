//! Counter store abstraction.
//!
//! The store is an injected capability: handlers only see the trait, so
//! tests substitute [`MemoryStore`] while production wires [`RedisStore`].
//! All mutable state of the application lives behind this interface; the
//! store's own `INCR` atomicity is what makes concurrent votes correct.

mod memory;
mod redis;

use async_trait::async_trait;
use pollbox_core::Result;

pub use self::redis::RedisStore;
pub use memory::MemoryStore;

#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Current value of a counter, or `None` if the key has never been set.
    async fn get(&self, key: &str) -> Result<Option<i64>>;

    /// Unconditionally overwrite a counter.
    async fn set(&self, key: &str, value: i64) -> Result<()>;

    /// Atomically add `delta` and return the new value.
    async fn incr(&self, key: &str, delta: i64) -> Result<i64>;
}
