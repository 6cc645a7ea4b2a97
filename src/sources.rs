//! Addresses and selector sets for every page we read.
//!
//! The rules below track the current markup of third-party sites. When a site
//! changes layout, the fix belongs here as data, not in the extraction code.

use crate::parser::select::FieldSelector;

/// Base used to absolutize relative reddit links.
pub const REDDIT_BASE: &str = "https://old.reddit.com";

pub const SOCCER_URL: &str = "https://old.reddit.com/r/soccer/";
pub const SOCCER_TOP_URL: &str =
    "https://old.reddit.com/r/soccer/search?q=juventus&restrict_sr=on&sort=top&t=day";
pub const TEAM_URL: &str = "https://old.reddit.com/r/Juve/top/";
pub const SCHEDULE_URL: &str = "https://bleacherreport.com/juventus/schedule";
pub const SQUAD_URL: &str = "https://fbref.com/en/squads/e0652b02/Juventus";

pub const TWITTER_URL: &str = "https://twitter.com/juventusfcen";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/juventus/?hl=en";
pub const ESPN_URL: &str = "http://www.espn.com/soccer/team/_/id/111/";
pub const TEAM_SITE_URL: &str = "https://www.juventus.com/en/";
pub const WHOSCORED_URL: &str = "https://www.whoscored.com/Teams/87/Show/Italy-Juventus";

/// Listing whose first posts are always pinned daily threads.
const PINNED_LISTINGS: &[(&str, usize)] = &[(SOCCER_URL, 2)];

pub const MAX_POSTS: usize = 10;

/// Selector set for one repeated-record layout.
#[derive(Debug, Clone, Copy)]
pub struct GroupPolicy {
    pub group: &'static str,
    pub fields: &'static [(&'static str, FieldSelector)],
}

/// Standard listing pages (`/r/x/`, `/r/x/top/`).
pub const LISTING: GroupPolicy = GroupPolicy {
    group: ".top-matter",
    fields: &[
        ("href", FieldSelector::attr(r#"a[data-event-action="title"]"#, "href")),
        ("title", FieldSelector::text(r#"a[data-event-action="title"]"#)),
    ],
};

/// Search result pages.
pub const SEARCH: GroupPolicy = GroupPolicy {
    group: ".search-result-header",
    fields: &[
        ("href", FieldSelector::attr("a", "href")),
        ("title", FieldSelector::text("a")),
    ],
};

/// Squad roster table; columns are resolved by `data-stat` role.
pub const ROSTER: GroupPolicy = GroupPolicy {
    group: "table#stats_player tr",
    fields: &[
        ("name", FieldSelector::text(r#"th[data-stat="player"]"#)),
        ("nation", FieldSelector::text(r#"td[data-stat="nationality"]"#)),
        ("position", FieldSelector::text(r#"td[data-stat="position"]"#)),
        ("age", FieldSelector::text(r#"td[data-stat="age"]"#)),
    ],
};

/// Header rows and trailing totals row around the roster body.
pub const ROSTER_HEADER_ROWS: usize = 2;
pub const ROSTER_FOOTER_ROWS: usize = 1;

pub const SUMMARY_CONTAINER: &str = r#"div[data-template="Partials/Teams/Summary"]"#;
pub const SUMMARY_PARAGRAPH: &str = "p";
pub const SUMMARY_LEAGUE_LINK: &str = "a";

pub const SCHEDULE_BODY_TAG: &str = "tbody";

/// Which layout a post listing uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Listing,
    Search,
}

impl ListingKind {
    pub fn policy(self) -> &'static GroupPolicy {
        match self {
            ListingKind::Listing => &LISTING,
            ListingKind::Search => &SEARCH,
        }
    }
}

/// Number of leading pinned posts to discard for `url`.
pub fn pinned_posts(url: &str) -> usize {
    PINNED_LISTINGS
        .iter()
        .find(|(u, _)| *u == url)
        .map(|(_, n)| *n)
        .unwrap_or(0)
}
