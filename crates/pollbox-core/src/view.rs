//! HTML page renderer.
//!
//! Pure string rendering: two counter values in, one document out. Labels
//! and title come from configuration/environment and are treated as
//! untrusted, so every interpolation goes through [`escape_html`].

use std::fmt::Write;

use crate::poll::{Poll, Tally, RESET_KEYWORD};

/// Escape text for both element and attribute positions.
pub fn escape_html(v: &str) -> String {
    let mut out = String::with_capacity(v.len());
    for c in v.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the voting page for the current tally.
pub fn render_page(poll: &Poll, tally: Tally) -> String {
    let title = escape_html(poll.title());
    let option_a = escape_html(poll.option_a());
    let option_b = escape_html(poll.option_b());

    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html>");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, "<meta charset=\"utf-8\">");
    let _ = writeln!(out, "<title>{title}</title>");
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, "<div id=\"container\">");
    let _ = writeln!(out, "<h1 id=\"title\">{title}</h1>");
    let _ = writeln!(out, "<form id=\"choice\" action=\"/\" method=\"post\">");
    let _ = writeln!(
        out,
        "<button name=\"vote\" value=\"{option_a}\" class=\"button button1\">{option_a}</button>"
    );
    let _ = writeln!(
        out,
        "<button name=\"vote\" value=\"{option_b}\" class=\"button button2\">{option_b}</button>"
    );
    let _ = writeln!(
        out,
        "<button name=\"vote\" value=\"{RESET_KEYWORD}\" class=\"button button3\">Reset</button>"
    );
    let _ = writeln!(out, "</form>");
    let _ = writeln!(out, "<div id=\"results\">");
    let _ = writeln!(out, "<div>{option_a} - {}</div>", tally.count_a);
    let _ = writeln!(out, "<div>{option_b} - {}</div>", tally.count_b);
    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}
