//! Poll construction and ballot dispatch rules.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use pollbox_core::{Ballot, Poll, RESET_KEYWORD};

fn poll() -> Poll {
    Poll::new("Cats".into(), "Dogs".into(), "Azure Voting App".into()).unwrap()
}

#[test]
fn rejects_empty_label() {
    let err = Poll::new(String::new(), "Dogs".into(), "t".into()).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG_INVALID");
}

#[test]
fn rejects_duplicate_labels() {
    let err = Poll::new("Cats".into(), "Cats".into(), "t".into()).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG_INVALID");
}

#[test]
fn rejects_label_shadowing_reset() {
    let err = Poll::new(RESET_KEYWORD.into(), "Dogs".into(), "t".into()).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG_INVALID");
}

#[test]
fn validate_target_accepts_both_options() {
    let p = poll();
    assert_eq!(p.validate_target("Cats").unwrap(), "Cats");
    assert_eq!(p.validate_target("Dogs").unwrap(), "Dogs");
}

#[test]
fn validate_target_rejects_unknown_label() {
    let err = poll().validate_target("Lizards").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INVALID_VOTE_TARGET");
}

#[test]
fn ballot_parse_reset_keyword() {
    assert_eq!(Ballot::parse("reset"), Ballot::Reset);
}

#[test]
fn ballot_parse_anything_else_is_a_cast() {
    assert_eq!(Ballot::parse("Cats"), Ballot::Cast("Cats".into()));
    // Case matters; "Reset" is an (invalid) vote target, not a reset.
    assert_eq!(Ballot::parse("Reset"), Ballot::Cast("Reset".into()));
}
