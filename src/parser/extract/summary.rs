use scraper::{ElementRef, Selector};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::fetch::Fetcher;
use crate::parser::normalize::{Split, SplitRule};
use crate::parser::parse_document;
use crate::parser::select::{child_text, compile, element_text};
use crate::sources::{SUMMARY_CONTAINER, SUMMARY_LEAGUE_LINK, SUMMARY_PARAGRAPH};

/// Team overview from the squad page header. Every field is parsed on its
/// own; a field that fails to parse stays empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamSummary {
    pub country: String,
    pub league: String,
    pub record: String,
    pub home: String,
    pub points: String,
    pub goals: String,
    pub position: String,
    pub diff: String,
}

/// What a summary paragraph carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLine {
    /// "Governing Country: Italy"
    Country,
    /// "Record: 10-2-3, 32 points, 3rd in Serie A"
    Record,
    /// "Next Match: Sun Oct 20 vs. Lazio (Home)"
    Home,
    /// "Goals: 28 (1.87 per game), 9 against (0.60 per game), +19 goal difference"
    Goals,
}

/// Paragraph order in the summary block.
const LINE_ROLES: &[SummaryLine] = &[
    SummaryLine::Country,
    SummaryLine::Record,
    SummaryLine::Home,
    SummaryLine::Goals,
];

const fn rule(steps: &'static [Split]) -> SplitRule {
    SplitRule { steps, strip: &[] }
}

const COUNTRY: SplitRule = rule(&[(" ", 2)]);
const RECORD: SplitRule = rule(&[(",", 0), (":", 1)]);
const POINTS: SplitRule = rule(&[(",", 1), ("points", 0)]);
const POSITION: SplitRule = rule(&[(",", 2), ("in", 0)]);
const HOME: SplitRule = SplitRule {
    steps: &[(" ", 7)],
    strip: &['(', ')'],
};
const GOALS: SplitRule = rule(&[(",", 0), (" ", 1)]);
const DIFF: SplitRule = rule(&[(",", 2), (" ", 1)]);

fn set(slot: &mut String, rule: &SplitRule, text: &str) {
    if let Some(value) = rule.apply(text) {
        *slot = value;
    }
}

impl SummaryLine {
    pub fn for_paragraph(index: usize) -> Option<Self> {
        LINE_ROLES.get(index).copied()
    }

    fn fill(self, paragraph: ElementRef, league_link: &Selector, summary: &mut TeamSummary) {
        let text = element_text(paragraph);
        match self {
            SummaryLine::Country => set(&mut summary.country, &COUNTRY, &text),
            SummaryLine::Record => {
                set(&mut summary.record, &RECORD, &text);
                set(&mut summary.points, &POINTS, &text);
                set(&mut summary.position, &POSITION, &text);
                summary.league = child_text(paragraph, league_link);
            }
            SummaryLine::Home => set(&mut summary.home, &HOME, &text),
            SummaryLine::Goals => {
                set(&mut summary.goals, &GOALS, &text);
                set(&mut summary.diff, &DIFF, &text);
            }
        }
    }
}

/// Parse the summary block of a squad page. A page without the block yields
/// an empty summary.
pub fn extract(markup: &str) -> Result<TeamSummary> {
    let doc = parse_document(markup);
    let container = compile(SUMMARY_CONTAINER)?;
    let paragraph = compile(SUMMARY_PARAGRAPH)?;
    let league_link = compile(SUMMARY_LEAGUE_LINK)?;

    let mut summary = TeamSummary::default();
    let Some(block) = doc.select(&container).next() else {
        debug!("no summary block in page");
        return Ok(summary);
    };

    for (index, p) in block.select(&paragraph).enumerate() {
        if let Some(line) = SummaryLine::for_paragraph(index) {
            line.fill(p, &league_link, &mut summary);
        }
    }

    Ok(summary)
}

pub async fn scrape(fetcher: &Fetcher, url: &str) -> Result<TeamSummary> {
    let markup = fetcher.fetch_markup(url).await?;
    extract(&markup)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squad() -> String {
        std::fs::read_to_string("tests/fixtures/fbref_squad.html").unwrap()
    }

    #[test]
    fn all_fields_from_fixture() {
        let summary = extract(&squad()).unwrap();
        assert_eq!(
            summary,
            TeamSummary {
                country: "Italy".into(),
                league: "Serie A".into(),
                record: "10-2-3".into(),
                home: "Home".into(),
                points: "32".into(),
                goals: "28".into(),
                position: "3rd".into(),
                diff: "+19".into(),
            }
        );
    }

    #[test]
    fn record_line_splits() {
        let text = "Record: 10-2-3, 32 points, 3rd in Serie A";
        assert_eq!(RECORD.apply(text).as_deref(), Some("10-2-3"));
        assert_eq!(POINTS.apply(text).as_deref(), Some("32"));
        assert_eq!(POSITION.apply(text).as_deref(), Some("3rd"));
    }

    #[test]
    fn fields_fail_independently() {
        let markup = r#"<div data-template="Partials/Teams/Summary">
<p>Italy</p>
<p>Record: 4-4-4</p>
</div>"#;
        let summary = extract(markup).unwrap();
        assert_eq!(summary.country, "");
        assert_eq!(summary.record, "4-4-4");
        assert_eq!(summary.points, "");
        assert_eq!(summary.position, "");
        assert_eq!(summary.league, "");
        assert_eq!(summary.goals, "");
    }

    #[test]
    fn missing_block_is_empty() {
        let summary = extract("<html><body></body></html>").unwrap();
        assert_eq!(summary, TeamSummary::default());
    }

    #[test]
    fn roles_by_index() {
        assert_eq!(SummaryLine::for_paragraph(0), Some(SummaryLine::Country));
        assert_eq!(SummaryLine::for_paragraph(3), Some(SummaryLine::Goals));
        assert_eq!(SummaryLine::for_paragraph(4), None);
    }
}
