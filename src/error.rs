use thiserror::Error;

/// Failures of a single source extraction. Missing fields inside a found
/// group are not errors; they come back as empty strings.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("missing <{0}> in the document tree")]
    NotFound(String),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
