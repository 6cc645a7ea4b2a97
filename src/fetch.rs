use std::time::Instant;

use tracing::{debug, info};

use crate::error::{Result, ScrapeError};

/// Thin wrapper over a shared HTTP client. One GET per call, no retries.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| ScrapeError::Fetch {
                url: String::new(),
                source: e,
            })?;
        Ok(Self { client })
    }

    /// Fetch the raw body of `url`. Transport failures and non-success
    /// statuses both surface as `ScrapeError::Fetch`.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let fetch_err = |source: reqwest::Error| ScrapeError::Fetch {
            url: url.to_string(),
            source,
        };

        let start = Instant::now();
        debug!("GET {}", url);
        let body = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(fetch_err)?
            .bytes()
            .await
            .map_err(fetch_err)?;

        info!(
            url,
            bytes = body.len(),
            latency_ms = start.elapsed().as_millis() as u64,
            "fetched"
        );
        Ok(body.to_vec())
    }

    /// Fetch `url` and decode it as (lossy) UTF-8 markup.
    pub async fn fetch_markup(&self, url: &str) -> Result<String> {
        let raw = self.fetch(url).await?;
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }
}
