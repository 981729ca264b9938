//! pollbox server binary.
//!
//! Startup order: tracing subscriber, config resolution (file + env),
//! Redis connect, counter initialization, then serve until SIGINT/SIGTERM.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal::unix::{signal, SignalKind};
use tracing_subscriber::{fmt, EnvFilter};

use pollbox_server::{app_state::AppState, config, router, store::RedisStore};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "pollbox.yaml".to_string());
    let cfg = config::load(&path).expect("config load failed");

    let store = RedisStore::connect(&cfg.redis_url, cfg.store_timeout)
        .await
        .expect("counter store connect failed");

    let state = AppState::new(cfg.poll, Arc::new(store));
    state.init_counters().await.expect("counter init failed");

    let app = router::build_router(state);

    tracing::info!(listen = %cfg.listen, "pollbox-server starting");
    let listener = TcpListener::bind(cfg.listen).await.expect("failed to bind");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server failed");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");

        tracing::info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;

        tracing::info!("received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
