use serde::Serialize;

use crate::error::Result;
use crate::fetch::Fetcher;
use crate::parser::normalize::{absolutize, cap_listing, truncate};
use crate::parser::parse_document;
use crate::parser::select::{extract_all, field};
use crate::render::{render, Fragment};
use crate::sources::{pinned_posts, ListingKind, MAX_POSTS, REDDIT_BASE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostRecord {
    pub url: String,
    pub title: String,
}

/// Pull post links out of a listing or search page fetched from `url`.
pub fn extract(markup: &str, url: &str, kind: ListingKind) -> Result<Vec<PostRecord>> {
    let doc = parse_document(markup);
    let posts = extract_all(&doc, kind.policy())?
        .iter()
        .map(|raw| PostRecord {
            url: absolutize(field(raw, "href"), REDDIT_BASE),
            title: truncate(field(raw, "title")),
        })
        .collect();

    Ok(cap_listing(posts, pinned_posts(url), MAX_POSTS))
}

pub async fn scrape(fetcher: &Fetcher, url: &str, kind: ListingKind) -> Result<Fragment> {
    let markup = fetcher.fetch_markup(url).await?;
    let posts = extract(&markup, url, kind)?;
    Ok(render(&posts))
}
