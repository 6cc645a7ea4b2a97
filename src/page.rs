//! Gathers every source into one render context for the page layer.
//!
//! Sources are independent: a failing one is logged and rendered empty, the
//! rest still fill in.

use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::fetch::Fetcher;
use crate::parser::extract::{posts, roster, schedule, summary, TeamSummary};
use crate::render::Fragment;
use crate::settings::{Settings, SocialLinks};
use crate::sources::ListingKind;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Tables {
    pub soccer: Fragment,
    pub soccer_top: Fragment,
    pub team: Fragment,
    pub schedule: Fragment,
    pub roster: Fragment,
}

#[derive(Debug, Clone, Serialize)]
pub struct Socials {
    pub twitter: String,
    pub instagram: String,
    pub team: String,
    pub espn: String,
    pub who: String,
}

impl From<&SocialLinks> for Socials {
    fn from(links: &SocialLinks) -> Self {
        Self {
            twitter: links.twitter.clone(),
            instagram: links.instagram.clone(),
            team: links.team.clone(),
            espn: links.espn.clone(),
            who: links.whoscored.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    pub table: Tables,
    pub stat: TeamSummary,
    pub sites: Socials,
}

fn or_empty<T: Default>(source: &str, result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!(source, error = %e, "source failed, rendering it empty");
            T::default()
        }
    }
}

/// Fetch and extract every source concurrently.
pub async fn build(fetcher: &Fetcher, settings: &Settings) -> PageContext {
    let urls = &settings.sources;
    info!("building page");

    let (soccer, soccer_top, team, schedule, roster, stat) = tokio::join!(
        posts::scrape(fetcher, &urls.soccer, ListingKind::Listing),
        posts::scrape(fetcher, &urls.soccer_top, ListingKind::Search),
        posts::scrape(fetcher, &urls.team, ListingKind::Listing),
        schedule::scrape(fetcher, &urls.schedule),
        roster::scrape(fetcher, &urls.squad),
        summary::scrape(fetcher, &urls.squad),
    );

    PageContext {
        table: Tables {
            soccer: or_empty("soccer", soccer),
            soccer_top: or_empty("soccer_top", soccer_top),
            team: or_empty("team", team),
            schedule: or_empty("schedule", schedule),
            roster: or_empty("roster", roster),
        },
        stat: or_empty("stats", stat),
        sites: Socials::from(&settings.socials),
    }
}
