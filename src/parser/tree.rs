use scraper::node::Element;
use scraper::{ElementRef, Html};

use crate::error::{Result, ScrapeError};

/// Depth-first, pre-order search for the first element matching `predicate`.
///
/// `sought` names the element in the `NotFound` error.
pub fn find_first<'a, F>(doc: &'a Html, sought: &str, predicate: F) -> Result<ElementRef<'a>>
where
    F: Fn(&Element) -> bool,
{
    doc.tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|e| predicate(e.value()))
        .ok_or_else(|| ScrapeError::NotFound(sought.to_string()))
}

/// First element with the given tag name.
pub fn find_tag<'a>(doc: &'a Html, tag: &str) -> Result<ElementRef<'a>> {
    find_first(doc, tag, |e| e.name() == tag)
}

/// Markup of the children of `element`, without its own tag pair.
pub fn render_children(element: ElementRef) -> String {
    element.inner_html()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_in_preorder() {
        let doc = Html::parse_document(
            r#"<div id="outer"><span id="a"></span></div><span id="b"></span>"#,
        );
        let found = find_tag(&doc, "span").unwrap();
        assert_eq!(found.value().attr("id"), Some("a"));
    }

    #[test]
    fn missing_tbody_is_not_found() {
        let doc = Html::parse_document("<html><body><div>no table</div></body></html>");
        let err = find_tag(&doc, "tbody").unwrap_err();
        assert!(matches!(err, ScrapeError::NotFound(ref t) if t == "tbody"));
    }

    #[test]
    fn children_only_drop_outer_tags() {
        let doc = Html::parse_document(
            "<table><tbody><tr><td>1</td></tr><tr><td>2</td></tr></tbody></table>",
        );
        let body = find_tag(&doc, "tbody").unwrap();
        assert_eq!(
            render_children(body),
            "<tr><td>1</td></tr><tr><td>2</td></tr>"
        );
    }

    #[test]
    fn predicate_can_match_attributes() {
        let doc = Html::parse_document(r#"<p class="x">1</p><p class="y">2</p>"#);
        let found = find_first(&doc, "p.y", |e| e.name() == "p" && e.attr("class") == Some("y"))
            .unwrap();
        assert_eq!(found.text().collect::<String>(), "2");
    }
}
