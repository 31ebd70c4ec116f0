//! HTML shown in the map overlay when a venue is focused.

use std::sync::LazyLock;

use regex::Regex;

use crate::venue::{VenueRecord, NOT_AVAILABLE};

static COMMA_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*").expect("valid regex"));
static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]").expect("valid regex"));

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Puts exactly one space after every comma: `"a,b, c"` becomes `"a, b, c"`.
#[must_use]
pub fn normalize_address(address: &str) -> String {
    COMMA_RUN.replace_all(address, ", ").into_owned()
}

/// DOM-safe id derived from a venue name; every character other than an
/// ASCII letter or digit becomes `_`.
#[must_use]
pub fn element_id(name: &str) -> String {
    NON_ALPHANUMERIC.replace_all(name, "_").into_owned()
}

#[must_use]
pub fn render_overlay(venue: &VenueRecord) -> String {
    let website = match venue.website_url() {
        Some(url) => {
            let url = escape_html(url);
            format!("<a href='{url}'>{url}</a>")
        }
        None => NOT_AVAILABLE.to_string(),
    };

    format!(
        "<h3>{}</h3><p>Address: {}</p><p>Website: {website}</p><p>Rating: <span class='badge'>{}</span></p>",
        escape_html(venue.name()),
        escape_html(&normalize_address(venue.formatted_address())),
        venue.rating(),
    )
}
