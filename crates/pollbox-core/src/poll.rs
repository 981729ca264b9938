//! Poll domain model.
//!
//! A poll is exactly two named options plus a display title, fixed at
//! startup and immutable for the lifetime of the process. Counter values
//! are not held here; they live in the external counter store, keyed by
//! option label.

use crate::error::{PollError, Result};

/// Form value that triggers a counter reset instead of a vote.
pub const RESET_KEYWORD: &str = "reset";

/// The two configured options plus the page title.
///
/// Constructed once at startup and shared read-only, so no synchronization
/// is needed around it.
#[derive(Debug, Clone)]
pub struct Poll {
    option_a: String,
    option_b: String,
    title: String,
}

impl Poll {
    /// Build a poll, rejecting label sets that cannot be dispatched on:
    /// empty labels, duplicate labels, and labels shadowing the reset
    /// keyword.
    pub fn new(option_a: String, option_b: String, title: String) -> Result<Self> {
        if option_a.is_empty() || option_b.is_empty() {
            return Err(PollError::Config("option labels must not be empty".into()));
        }
        if option_a == option_b {
            return Err(PollError::Config(format!(
                "option labels must differ (both are {option_a:?})"
            )));
        }
        if option_a == RESET_KEYWORD || option_b == RESET_KEYWORD {
            return Err(PollError::Config(format!(
                "option label {RESET_KEYWORD:?} collides with the reset keyword"
            )));
        }
        Ok(Self {
            option_a,
            option_b,
            title,
        })
    }

    pub fn option_a(&self) -> &str {
        &self.option_a
    }

    pub fn option_b(&self) -> &str {
        &self.option_b
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Check a vote target against the configured options and return the
    /// canonical label. Unknown targets are rejected so arbitrary keys can
    /// never reach the counter store.
    pub fn validate_target(&self, label: &str) -> Result<&str> {
        if label == self.option_a {
            Ok(&self.option_a)
        } else if label == self.option_b {
            Ok(&self.option_b)
        } else {
            Err(PollError::InvalidVoteTarget(label.to_string()))
        }
    }
}

/// Parsed `vote` form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ballot {
    /// Cast one vote for the named option.
    Cast(String),
    /// Set both counters back to zero.
    Reset,
}

impl Ballot {
    pub fn parse(raw: &str) -> Ballot {
        if raw == RESET_KEYWORD {
            Ballot::Reset
        } else {
            Ballot::Cast(raw.to_string())
        }
    }
}

/// Snapshot of both counters, in option order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub count_a: i64,
    pub count_b: i64,
}
