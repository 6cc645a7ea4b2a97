use std::fmt;

use serde::Serialize;

use crate::parser::extract::{PlayerRecord, PostRecord};
use crate::parser::normalize::escape_html;

/// Pre-rendered markup, embedded verbatim by whoever builds the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Fragment(String);

impl Fragment {
    /// Wrap markup that is already safe to embed.
    pub fn from_markup(markup: String) -> Self {
        Self(markup)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A record with a fixed table-row layout.
pub trait Row {
    fn write_row(&self, out: &mut String);
}

impl Row for PostRecord {
    fn write_row(&self, out: &mut String) {
        out.push_str(&format!(
            "<tr>\n<td><a href=\"{}\" target=\"_blank\">{}</a></td>\n</tr>\n",
            escape_html(&self.url),
            escape_html(&self.title),
        ));
    }
}

impl Row for PlayerRecord {
    fn write_row(&self, out: &mut String) {
        out.push_str("<tr>\n");
        for cell in [&self.name, &self.nation, &self.position, &self.age] {
            out.push_str(&format!("\t<td>{}</td>\n", escape_html(cell)));
        }
        out.push_str("</tr>\n");
    }
}

/// Expand one row per record, in order. No records, empty fragment.
pub fn render<R: Row>(records: &[R]) -> Fragment {
    let mut out = String::new();
    for record in records {
        record.write_row(&mut out);
    }
    Fragment(out)
}
