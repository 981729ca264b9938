//! pollbox core: poll domain model, error types, and the HTML view.
//!
//! This crate defines the voting domain (two fixed options plus a display
//! title), the error surface shared by the server, and the pure page
//! renderer. It intentionally carries no transport or runtime dependencies
//! so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `PollError`/`Result` so production
//! processes do not crash on malformed input or bad configuration.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod poll;
pub mod view;

/// Shared result type.
pub use error::{PollError, Result};
pub use poll::{Ballot, Poll, Tally, RESET_KEYWORD};
