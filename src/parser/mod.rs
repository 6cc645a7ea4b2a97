pub mod extract;
pub mod normalize;
pub mod select;
pub mod tree;

use scraper::Html;

/// Parse a full page. Malformed markup is recovered, never rejected.
pub fn parse_document(markup: &str) -> Html {
    Html::parse_document(markup)
}
