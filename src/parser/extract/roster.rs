use serde::Serialize;

use crate::error::Result;
use crate::fetch::Fetcher;
use crate::parser::normalize::{drop_fixed_rows, nation_code};
use crate::parser::parse_document;
use crate::parser::select::{extract_all, field};
use crate::render::{render, Fragment};
use crate::sources::{ROSTER, ROSTER_FOOTER_ROWS, ROSTER_HEADER_ROWS};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    pub name: String,
    pub nation: String,
    pub position: String,
    pub age: String,
}

/// Player rows of the squad table, header and totals rows removed.
pub fn extract(markup: &str) -> Result<Vec<PlayerRecord>> {
    let doc = parse_document(markup);
    let rows = extract_all(&doc, &ROSTER)?;

    let players = drop_fixed_rows(rows, ROSTER_HEADER_ROWS, ROSTER_FOOTER_ROWS)
        .iter()
        .map(|raw| PlayerRecord {
            name: field(raw, "name").to_string(),
            nation: nation_code(field(raw, "nation")),
            position: field(raw, "position").to_string(),
            age: field(raw, "age").to_string(),
        })
        .collect();

    Ok(players)
}

pub async fn scrape(fetcher: &Fetcher, url: &str) -> Result<Fragment> {
    let markup = fetcher.fetch_markup(url).await?;
    let players = extract(&markup)?;
    Ok(render(&players))
}
