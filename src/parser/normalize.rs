use std::sync::LazyLock;

use regex::Regex;

static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://").unwrap());

pub const TITLE_MAX: usize = 50;
pub const ELLIPSIS: &str = "...";

/// Prefix `base` onto `href` unless it already carries a scheme.
pub fn absolutize(href: &str, base: &str) -> String {
    if SCHEME_RE.is_match(href) {
        href.to_string()
    } else {
        format!("{}{}", base, href)
    }
}

/// Cap `text` at `TITLE_MAX` chars, marking the cut with an ellipsis.
pub fn truncate(text: &str) -> String {
    if text.chars().count() <= TITLE_MAX {
        return text.to_string();
    }
    let keep = TITLE_MAX - ELLIPSIS.len();
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// `"ENG England"` -> `"ENG"`.
pub fn nation_code(raw: &str) -> String {
    raw.split_whitespace().next().unwrap_or_default().to_string()
}

/// Drop `head` leading and `tail` trailing items; too few items leaves nothing.
pub fn drop_fixed_rows<T>(mut rows: Vec<T>, head: usize, tail: usize) -> Vec<T> {
    if rows.len() <= head + tail {
        return Vec::new();
    }
    rows.truncate(rows.len() - tail);
    rows.drain(..head);
    rows
}

/// Skip pinned entries, then cap the listing.
pub fn cap_listing<T>(rows: Vec<T>, pinned: usize, max: usize) -> Vec<T> {
    rows.into_iter().skip(pinned).take(max).collect()
}

/// One split step: `(delimiter, segment)`.
pub type Split = (&'static str, usize);

/// A chain of split steps followed by trimming and stripping wrap chars.
///
/// Segments are passed on untrimmed between steps; only the final value is
/// trimmed. A missing segment anywhere makes the whole rule yield `None`.
#[derive(Debug, Clone, Copy)]
pub struct SplitRule {
    pub steps: &'static [Split],
    pub strip: &'static [char],
}

impl SplitRule {
    pub fn apply(&self, text: &str) -> Option<String> {
        let mut current = text;
        for (delimiter, segment) in self.steps {
            current = current.split(*delimiter).nth(*segment)?;
        }
        let value: String = current
            .trim()
            .chars()
            .filter(|c| !self.strip.contains(c))
            .collect();
        Some(value)
    }
}

/// Escape text for use inside element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
