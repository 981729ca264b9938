//! View renderer output and escaping tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use pollbox_core::view::{escape_html, render_page};
use pollbox_core::{Poll, Tally};

#[test]
fn page_carries_title_counts_and_reset_button() {
    let poll = Poll::new("Cats".into(), "Dogs".into(), "Azure Voting App".into()).unwrap();
    let html = render_page(
        &poll,
        Tally {
            count_a: 3,
            count_b: 7,
        },
    );

    assert!(html.contains("<title>Azure Voting App</title>"));
    assert!(html.contains("Cats - 3"));
    assert!(html.contains("Dogs - 7"));
    assert!(html.contains("value=\"Cats\""));
    assert!(html.contains("value=\"Dogs\""));
    assert!(html.contains("value=\"reset\""));
    assert!(html.contains("method=\"post\""));
}

#[test]
fn hostile_labels_are_escaped() {
    let poll = Poll::new(
        "<script>alert(1)</script>".into(),
        "\"><img src=x>".into(),
        "a&b".into(),
    )
    .unwrap();
    let html = render_page(
        &poll,
        Tally {
            count_a: 0,
            count_b: 0,
        },
    );

    assert!(!html.contains("<script>"));
    assert!(!html.contains("<img"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("a&amp;b"));
}

#[test]
fn escape_covers_attribute_breakouts() {
    assert_eq!(escape_html("a\"b'c"), "a&quot;b&#x27;c");
    assert_eq!(escape_html("plain"), "plain");
}
