use std::sync::LazyLock;

use regex::Regex;

use crate::model::styled::{StyledRun, StyledText};

// Shortest span between two `**` pairs; `.` stops at newlines.
static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"));

/// Splits `text` into plain and bold runs around `**...**` pairs.
///
/// Text with no complete pair comes back as a single plain run. Empty
/// spans are never emitted, so `""` and `"****"` both yield no runs.
pub fn parse(text: &str) -> StyledText {
    let mut out = StyledText::new();
    let mut last = 0;

    for caps in BOLD_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        if whole.start() > last {
            out.push(StyledRun::plain(&text[last..whole.start()]));
        }

        if let Some(inner) = caps.get(1) {
            out.push(StyledRun::bold(inner.as_str()));
        }

        last = whole.end();
    }

    if last < text.len() {
        out.push(StyledRun::plain(&text[last..]));
    }

    out
}
