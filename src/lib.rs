//! Scrapes a handful of fixed fan pages (reddit listings, a schedule, a squad
//! roster and summary) into markup fragments ready to embed in one page.

pub mod error;
pub mod fetch;
pub mod page;
pub mod parser;
pub mod render;
pub mod settings;
pub mod sources;

pub use error::{Result, ScrapeError};
pub use fetch::Fetcher;
pub use page::PageContext;
pub use render::Fragment;
pub use settings::Settings;
