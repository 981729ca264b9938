//! Shared application state.
//!
//! The poll (labels + title) is resolved once at startup and immutable
//! afterwards; the counter store is an injected trait object. Cloning the
//! state is cheap (one `Arc`), which is what axum's `State` extractor
//! expects.

use std::sync::Arc;

use pollbox_core::{Poll, Result};
use tracing::info;

use crate::obs::PollMetrics;
use crate::store::CounterStore;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    poll: Poll,
    store: Arc<dyn CounterStore>,
    metrics: PollMetrics,
}

impl AppState {
    pub fn new(poll: Poll, store: Arc<dyn CounterStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                poll,
                store,
                metrics: PollMetrics::default(),
            }),
        }
    }

    pub fn poll(&self) -> &Poll {
        &self.inner.poll
    }

    pub fn store(&self) -> &dyn CounterStore {
        self.inner.store.as_ref()
    }

    pub fn metrics(&self) -> &PollMetrics {
        &self.inner.metrics
    }

    /// Startup-time counter initialization: create each option's counter at
    /// zero if the store has no value for it, leaving existing values
    /// untouched. Must run before the first request is served so a fresh
    /// store still yields a well-defined first read.
    pub async fn init_counters(&self) -> Result<()> {
        for label in [self.poll().option_a(), self.poll().option_b()] {
            if self.store().get(label).await?.is_none() {
                self.store().set(label, 0).await?;
                info!(option = %label, "initialized counter to 0");
            }
        }
        Ok(())
    }
}
