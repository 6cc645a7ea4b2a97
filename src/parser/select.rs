use std::collections::BTreeMap;

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};
use crate::sources::GroupPolicy;

/// What to read from the elements a field selector matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    /// Concatenated text of every match, trimmed.
    Text,
    /// Attribute of the first match carrying it.
    Attr(&'static str),
}

/// A selector scoped to one group match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelector {
    pub selector: &'static str,
    pub value: FieldValue,
}

impl FieldSelector {
    pub const fn text(selector: &'static str) -> Self {
        Self {
            selector,
            value: FieldValue::Text,
        }
    }

    pub const fn attr(selector: &'static str, name: &'static str) -> Self {
        Self {
            selector,
            value: FieldValue::Attr(name),
        }
    }
}

/// Field name -> raw value for one group match.
pub type RawRecord = BTreeMap<&'static str, String>;

/// Value of `name` in `record`, or `""` when the policy has no such field.
pub fn field<'r>(record: &'r RawRecord, name: &str) -> &'r str {
    record.get(name).map(String::as_str).unwrap_or_default()
}

pub fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| ScrapeError::Parse(format!("invalid selector {:?}: {:?}", selector, e)))
}

/// Text of `element` and all its descendants, joined as-is.
pub fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

/// Text of every match of `selector` under `scope`, trimmed.
pub fn child_text(scope: ElementRef, selector: &Selector) -> String {
    scope
        .select(selector)
        .map(element_text)
        .collect::<String>()
        .trim()
        .to_string()
}

pub fn child_attr(scope: ElementRef, selector: &Selector, name: &str) -> String {
    scope
        .select(selector)
        .find_map(|e| e.value().attr(name))
        .unwrap_or_default()
        .to_string()
}

/// Run a group policy over a parsed document.
///
/// Every element matching the group selector yields one record, in document
/// order. A field whose selector matches nothing is recorded as `""`.
pub fn extract_all(doc: &Html, policy: &GroupPolicy) -> Result<Vec<RawRecord>> {
    let group = compile(policy.group)?;
    let fields = policy
        .fields
        .iter()
        .map(|(name, field)| Ok((*name, compile(field.selector)?, field.value)))
        .collect::<Result<Vec<_>>>()?;

    let records = doc
        .select(&group)
        .map(|element| {
            fields
                .iter()
                .map(|(name, selector, value)| {
                    let raw = match value {
                        FieldValue::Text => child_text(element, selector),
                        FieldValue::Attr(attr) => child_attr(element, selector, attr),
                    };
                    (*name, raw)
                })
                .collect::<RawRecord>()
        })
        .collect();

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLICY: GroupPolicy = GroupPolicy {
        group: "div.item",
        fields: &[
            ("href", FieldSelector::attr("a", "href")),
            ("label", FieldSelector::text("a")),
            ("note", FieldSelector::text("span.note")),
        ],
    };

    #[test]
    fn records_follow_document_order() {
        let doc = Html::parse_document(
            r#"<div class="item"><a href="/one">One</a></div>
               <div class="item"><a href="/two"> Two </a></div>"#,
        );
        let records = extract_all(&doc, &POLICY).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["href"], "/one");
        assert_eq!(records[1]["label"], "Two");
    }

    #[test]
    fn missing_field_is_empty_string() {
        let doc = Html::parse_document(r#"<div class="item"><a href="/x">X</a></div>"#);
        let records = extract_all(&doc, &POLICY).unwrap();
        assert_eq!(records[0]["note"], "");
    }

    #[test]
    fn no_groups_is_empty_not_error() {
        let doc = Html::parse_document("<p>nothing here</p>");
        assert!(extract_all(&doc, &POLICY).unwrap().is_empty());
    }

    #[test]
    fn attr_skips_matches_without_it() {
        let doc = Html::parse_document(
            r#"<div class="item"><a name="anchor">A</a><a href="/b">B</a></div>"#,
        );
        let records = extract_all(&doc, &POLICY).unwrap();
        assert_eq!(records[0]["href"], "/b");
        assert_eq!(records[0]["label"], "AB");
    }

    #[test]
    fn invalid_selector_is_parse_error() {
        let bad = GroupPolicy {
            group: "div[",
            fields: &[],
        };
        let doc = Html::parse_document("<div></div>");
        assert!(matches!(extract_all(&doc, &bad), Err(ScrapeError::Parse(_))));
    }
}
