//! Scoped tracing around counter operations.
//!
//! Each counter read gets its own span carrying the option label and the
//! value observed, with a structured event inside it. Spans close on every
//! exit path (RAII guard), and emission cannot fail, so telemetry can never
//! abort the request it is attached to.

use tracing::{info, info_span};

/// One span + event per counter read, on both the read and write paths.
pub fn record_counter_read(option: &str, value: i64) {
    let span = info_span!("counter_read", option = %option, value);
    let _enter = span.enter();
    info!(option = %option, value, "counter value retrieved");
}

/// Event per counter on the reset path, before the re-read.
pub fn record_counter_reset(option: &str) {
    let span = info_span!("counter_reset", option = %option);
    let _enter = span.enter();
    info!(option = %option, "counter reset to 0");
}
