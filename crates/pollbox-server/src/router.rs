//! Axum router wiring.
//!
//! The voting page lives at `/` (GET renders, POST votes); `/healthz` and
//! `/metrics` are operational.

use axum::routing::get;
use axum::Router;

use crate::{app_state::AppState, ops, routes};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index).post(routes::vote))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
