use crate::error::Result;
use crate::fetch::Fetcher;
use crate::parser::parse_document;
use crate::parser::tree::{find_tag, render_children};
use crate::render::Fragment;
use crate::sources::SCHEDULE_BODY_TAG;

/// Rows of the first schedule table body, passed through as markup.
pub fn extract(markup: &str) -> Result<Fragment> {
    let doc = parse_document(markup);
    let body = find_tag(&doc, SCHEDULE_BODY_TAG)?;
    Ok(Fragment::from_markup(render_children(body)))
}

pub async fn scrape(fetcher: &Fetcher, url: &str) -> Result<Fragment> {
    let markup = fetcher.fetch_markup(url).await?;
    extract(&markup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;

    fn schedule() -> String {
        std::fs::read_to_string("tests/fixtures/br_schedule.html").unwrap()
    }

    #[test]
    fn rows_without_tbody_tags() {
        let fragment = extract(&schedule()).unwrap();
        let markup = fragment.as_str();
        assert!(markup.trim_start().starts_with("<tr"));
        assert!(markup.trim_end().ends_with("</tr>"));
        assert!(!markup.contains("tbody"));
        assert_eq!(markup.matches("<tr").count(), 3);
        assert!(markup.contains("Lazio"));
    }

    #[test]
    fn first_table_body_wins() {
        let fragment = extract(&schedule()).unwrap();
        assert!(!fragment.as_str().contains("Standings"));
    }

    #[test]
    fn no_table_is_not_found() {
        let err = extract("<html><body><p>Schedule unavailable</p></body></html>").unwrap_err();
        assert!(matches!(err, ScrapeError::NotFound(ref tag) if tag == "tbody"));
    }

    #[test]
    fn repeat_extraction_identical() {
        let markup = schedule();
        assert_eq!(extract(&markup).unwrap(), extract(&markup).unwrap());
    }
}
