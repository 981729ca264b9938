//! pollbox server library entry.
//!
//! This crate wires the config loader, counter-store client, request
//! handlers, and operational endpoints into a cohesive web stack. It is
//! intended to be consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
pub mod routes;
pub mod store;
pub mod telemetry;
