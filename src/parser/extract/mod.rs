//! Per-source extraction: parse, select, normalize.
//!
//! Each `extract` function is pure over its markup input. Each `scrape`
//! function adds the single fetch for its source and renders the result.

pub mod posts;
pub mod roster;
pub mod schedule;
pub mod summary;

pub use posts::PostRecord;
pub use roster::PlayerRecord;
pub use summary::TeamSummary;
