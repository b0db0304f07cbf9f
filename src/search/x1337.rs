//! 1337x client
//!
//! Scrapes the HTML search result table. Results carry no magnet of their
//! own; the detail page has it and the magnet resolver picks it up there.

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};

use super::{SearchError, SearchProvider};
use crate::models::SearchItem;

const PROVIDER: &str = "1337x";

/// 1337x search provider
pub struct X1337Provider {
    base_url: String,
    client: reqwest::Client,
}

impl X1337Provider {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a provider with a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(reqwest::Client::new(), base_url)
    }
}

#[async_trait]
impl SearchProvider for X1337Provider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchItem>, SearchError> {
        let url = format!("{}/search/{}/1/", self.base_url, urlencoding::encode(query));

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                provider: PROVIDER,
                status: status.as_u16(),
            });
        }

        let html = response.text().await?;
        parse_results(&self.base_url, &html)
    }
}

fn selector(css: &str) -> Result<Selector, SearchError> {
    Selector::parse(css).map_err(|e| SearchError::InvalidResponse {
        provider: PROVIDER,
        reason: format!("bad selector {}: {}", css, e),
    })
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Parse a search result page; rows without a torrent link are skipped
pub fn parse_results(base_url: &str, html: &str) -> Result<Vec<SearchItem>, SearchError> {
    let document = Html::parse_document(html);
    let row_selector = selector("table.table-list tbody tr")?;
    let name_selector = selector("td.name a")?;
    let seeds_selector = selector("td.seeds")?;

    let mut items = Vec::new();
    for row in document.select(&row_selector) {
        // The name cell holds an icon link first, then the torrent link
        let Some(anchor) = row.select(&name_selector).find(|a| {
            a.value()
                .attr("href")
                .is_some_and(|href| href.starts_with("/torrent/"))
        }) else {
            continue;
        };

        let name = cell_text(anchor);
        if name.is_empty() {
            continue;
        }
        let href = anchor.value().attr("href").unwrap_or_default();

        let peers = row
            .select(&seeds_selector)
            .next()
            .and_then(|td| cell_text(td).replace(',', "").parse().ok())
            .unwrap_or(0);

        items.push(SearchItem {
            name,
            peers,
            link: format!("{}{}", base_url, href),
            magnet: None,
            provider: PROVIDER.to_string(),
        });
    }

    Ok(items)
}
