//! Vote request handlers.
//!
//! Responsibilities:
//! - GET `/`: read both counters, emit telemetry per read, render the page.
//! - POST `/`: apply the ballot (one increment, or reset both), then
//!   re-fetch both counters and render the same page.
//!
//! A store failure aborts the request (500, no retry, no partial render).
//! Between a write and its re-fetch another writer may land, so the
//! rendered value can reflect a concurrent request's effect; that race is
//! accepted.

use axum::extract::{Form, State};
use axum::response::Html;
use serde::Deserialize;

use pollbox_core::view::render_page;
use pollbox_core::{Ballot, Result, Tally};

use crate::app_state::AppState;
use crate::error::HttpError;
use crate::store::CounterStore;
use crate::telemetry;

#[derive(Debug, Deserialize)]
pub struct BallotForm {
    pub vote: String,
}

pub async fn index(
    State(app): State<AppState>,
) -> std::result::Result<Html<String>, HttpError> {
    let tally = read_tally(&app).await?;

    app.metrics().page_renders.inc(&[("method", "get")]);
    Ok(Html(render_page(app.poll(), tally)))
}

pub async fn vote(
    State(app): State<AppState>,
    Form(form): Form<BallotForm>,
) -> std::result::Result<Html<String>, HttpError> {
    match Ballot::parse(&form.vote) {
        Ballot::Reset => {
            for label in [app.poll().option_a(), app.poll().option_b()] {
                app.store().set(label, 0).await.map_err(|e| {
                    app.metrics().store_errors.inc(&[("op", "set")]);
                    e
                })?;
                telemetry::record_counter_reset(label);
            }
            app.metrics().resets.inc(&[]);
        }
        Ballot::Cast(target) => {
            let label = app.poll().validate_target(&target).map_err(|e| {
                app.metrics().invalid_targets.inc(&[]);
                e
            })?;
            app.store().incr(label, 1).await.map_err(|e| {
                app.metrics().store_errors.inc(&[("op", "incr")]);
                e
            })?;
            app.metrics().votes_cast.inc(&[("option", label)]);
        }
    }

    // Fresh read after the mutation; rendered counts may already include
    // concurrent writers.
    let tally = read_tally(&app).await?;

    app.metrics().page_renders.inc(&[("method", "post")]);
    Ok(Html(render_page(app.poll(), tally)))
}

/// Fetch both counters, emitting one telemetry span + event per read. A
/// counter absent after startup init (externally flushed store) reads as 0.
async fn read_tally(app: &AppState) -> Result<Tally> {
    let count_a = fetch_count(app, app.poll().option_a()).await?;
    let count_b = fetch_count(app, app.poll().option_b()).await?;
    Ok(Tally { count_a, count_b })
}

async fn fetch_count(app: &AppState, label: &str) -> Result<i64> {
    let value = app
        .store()
        .get(label)
        .await
        .map_err(|e| {
            app.metrics().store_errors.inc(&[("op", "get")]);
            e
        })?
        .unwrap_or(0);

    telemetry::record_counter_read(label, value);
    Ok(value)
}
