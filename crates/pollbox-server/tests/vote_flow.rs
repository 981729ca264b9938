//! End-to-end handler tests against the in-memory counter store.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use pollbox_core::Poll;
use pollbox_server::app_state::AppState;
use pollbox_server::routes::{self, BallotForm};
use pollbox_server::store::{CounterStore, MemoryStore};

fn app() -> AppState {
    let poll = Poll::new("Cats".into(), "Dogs".into(), "Azure Voting App".into()).unwrap();
    AppState::new(poll, Arc::new(MemoryStore::new()))
}

async fn cast(app: &AppState, vote: &str) -> Result<String, StatusCode> {
    let form = Form(BallotForm {
        vote: vote.to_string(),
    });
    match routes::vote(State(app.clone()), form).await {
        Ok(html) => Ok(html.0),
        Err(e) => Err(e.into_response().status()),
    }
}

async fn read(app: &AppState) -> String {
    routes::index(State(app.clone())).await.unwrap().0
}

#[tokio::test]
async fn init_zeroes_absent_counters_only() {
    let app = app();
    app.store().set("Dogs", 42).await.unwrap();

    app.init_counters().await.unwrap();

    assert_eq!(app.store().get("Cats").await.unwrap(), Some(0));
    assert_eq!(app.store().get("Dogs").await.unwrap(), Some(42));

    // Running init again is a no-op.
    app.init_counters().await.unwrap();
    assert_eq!(app.store().get("Dogs").await.unwrap(), Some(42));
}

#[tokio::test]
async fn get_is_idempotent() {
    let app = app();
    app.init_counters().await.unwrap();

    let first = read(&app).await;
    let second = read(&app).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn increments_accumulate_per_option() {
    let app = app();
    app.init_counters().await.unwrap();

    for _ in 0..5 {
        cast(&app, "Cats").await.unwrap();
    }
    for _ in 0..2 {
        cast(&app, "Dogs").await.unwrap();
    }

    assert_eq!(app.store().get("Cats").await.unwrap(), Some(5));
    assert_eq!(app.store().get("Dogs").await.unwrap(), Some(2));

    let html = read(&app).await;
    assert!(html.contains("Cats - 5"));
    assert!(html.contains("Dogs - 2"));
}

#[tokio::test]
async fn reset_zeroes_both_and_is_idempotent() {
    let app = app();
    app.init_counters().await.unwrap();
    cast(&app, "Cats").await.unwrap();
    cast(&app, "Cats").await.unwrap();
    cast(&app, "Dogs").await.unwrap();

    let html = cast(&app, "reset").await.unwrap();
    assert!(html.contains("Cats - 0"));
    assert!(html.contains("Dogs - 0"));

    let html = cast(&app, "reset").await.unwrap();
    assert!(html.contains("Cats - 0"));
    assert!(html.contains("Dogs - 0"));
}

#[tokio::test]
async fn boot_to_reset_scenario() {
    let app = app();

    app.init_counters().await.unwrap();
    let html = read(&app).await;
    assert!(html.contains("Cats - 0"));
    assert!(html.contains("Dogs - 0"));

    let html = cast(&app, "Cats").await.unwrap();
    assert!(html.contains("Cats - 1"));
    assert!(html.contains("Dogs - 0"));

    let html = cast(&app, "reset").await.unwrap();
    assert!(html.contains("Cats - 0"));
    assert!(html.contains("Dogs - 0"));
}

#[tokio::test]
async fn unknown_target_is_rejected_without_store_writes() {
    let app = app();
    app.init_counters().await.unwrap();

    let status = cast(&app, "Lizards").await.expect_err("must be rejected");
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // No arbitrary key was created and no counter moved.
    assert_eq!(app.store().get("Lizards").await.unwrap(), None);
    assert_eq!(app.store().get("Cats").await.unwrap(), Some(0));
    assert_eq!(app.store().get("Dogs").await.unwrap(), Some(0));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_votes_all_land() {
    let app = app();
    app.init_counters().await.unwrap();

    let mut tasks = Vec::new();
    for _ in 0..32 {
        let app = app.clone();
        tasks.push(tokio::spawn(async move {
            cast(&app, "Cats").await.unwrap();
        }));
    }
    for t in tasks {
        t.await.unwrap();
    }

    assert_eq!(app.store().get("Cats").await.unwrap(), Some(32));
    assert_eq!(app.store().get("Dogs").await.unwrap(), Some(0));
}

#[tokio::test]
async fn metrics_track_votes_and_rejections() {
    let app = app();
    app.init_counters().await.unwrap();

    cast(&app, "Cats").await.unwrap();
    cast(&app, "reset").await.unwrap();
    let _ = cast(&app, "Lizards").await;

    let body = app.metrics().render();
    assert!(body.contains("pollbox_votes_total{option=\"Cats\"} 1"));
    assert!(body.contains("pollbox_resets_total 1"));
    assert!(body.contains("pollbox_invalid_vote_targets_total 1"));
}
