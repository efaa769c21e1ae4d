//! Pass-through converter: mdBook renders inline HTML, so the fragment is
//! kept verbatim except for heading tags, which are shifted.

use crate::convert::HtmlConverter;
use crate::error::Result;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_HEADING_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(/?)h([1-6])\b").unwrap());

pub struct RawHtmlConverter;

impl HtmlConverter for RawHtmlConverter {
    fn convert(&self, html: &str, heading_shift: usize) -> Result<String> {
        let html = html.trim();
        if html.is_empty() {
            return Ok(String::new());
        }
        let mut output = shift_headings(html, heading_shift);
        output.push('\n');
        Ok(output)
    }
}

/// Rewrite `<hN` / `</hN` to `h(N + shift)`, capped at `h6`.
fn shift_headings(html: &str, shift: usize) -> String {
    if shift == 0 {
        return html.to_string();
    }
    RE_HEADING_TAG
        .replace_all(html, |caps: &Captures| {
            let level: usize = caps[2].parse().unwrap_or(1);
            format!("<{}h{}", &caps[1], (level + shift).min(6))
        })
        .into_owned()
}
