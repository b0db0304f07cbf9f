//! Magnet resolution from a result's detail page
//!
//! Fetches the page, takes the first `href="magnet:..."` anchor and falls
//! back to the magnet the indexer supplied with the result.

use async_trait::async_trait;
use regex::Regex;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors from magnet resolution
#[derive(Debug, Error)]
pub enum MagnetError {
    #[error("Failed to fetch detail page: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("No magnet link on {0} and no fallback available")]
    NotFound(String),
}

/// Fetches a page body as text
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, MagnetError>;
}

/// reqwest-backed page fetcher
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, MagnetError> {
        let response = self.client.get(url).send().await?;
        // Error pages are scanned too; status is only logged
        debug!(url, status = response.status().as_u16(), "fetched detail page");
        Ok(response.text().await?)
    }
}

/// First magnet anchor target in an HTML document
pub fn extract_magnet(html: &str) -> Option<String> {
    let re = Regex::new(r#"href="(magnet:[^"]+)""#).ok()?;
    re.captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|m| !m.is_empty())
}

/// Magnet for a selected result: detail page first, then the fallback
pub async fn resolve_magnet(
    fetcher: &dyn PageFetcher,
    detail_link: &str,
    fallback: Option<&str>,
) -> Result<String, MagnetError> {
    let html = fetcher.fetch_text(detail_link).await?;

    if let Some(magnet) = extract_magnet(&html) {
        debug!(detail_link, "magnet found on detail page");
        return Ok(magnet);
    }

    match fallback.filter(|m| !m.is_empty()) {
        Some(magnet) => {
            debug!(detail_link, "no magnet on detail page, using fallback");
            Ok(magnet.to_string())
        }
        None => Err(MagnetError::NotFound(detail_link.to_string())),
    }
}
