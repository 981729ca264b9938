//! Top-level facade crate for pollbox.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use pollbox_core::*;
}

pub mod server {
    pub use pollbox_server::*;
}
