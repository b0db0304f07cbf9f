//! Apibay client
//!
//! The Pirate Bay JSON API. Every numeric field comes back as a string and
//! an empty result set is a single sentinel entry with id "0".

use async_trait::async_trait;
use serde::Deserialize;

use super::{SearchError, SearchProvider};
use crate::models::{magnet_from_hash, SearchItem};

const PROVIDER: &str = "apibay";

/// Detail pages live on the main site, not on the API host
const DETAIL_URL: &str = "https://thepiratebay.org/description.php?id=";

/// Trackers appended to generated magnets
const TRACKERS: &[&str] = &[
    "udp://tracker.opentrackr.org:1337/announce",
    "udp://open.stealth.si:80/announce",
    "udp://tracker.torrent.eu.org:451/announce",
    "udp://exodus.desync.com:6969/announce",
    "udp://tracker.openbittorrent.com:6969/announce",
];

/// Single entry of a q.php response
#[derive(Debug, Deserialize)]
struct ApibayEntry {
    id: String,
    name: String,
    info_hash: String,
    seeders: String,
}

impl ApibayEntry {
    fn into_search_item(self) -> Option<SearchItem> {
        if self.id == "0" || self.info_hash.chars().all(|c| c == '0') {
            return None;
        }

        let magnet = magnet_from_hash(&self.info_hash, &self.name, TRACKERS);
        Some(SearchItem {
            peers: self.seeders.trim().parse().unwrap_or(0),
            link: format!("{}{}", DETAIL_URL, self.id),
            magnet: Some(magnet),
            name: self.name,
            provider: PROVIDER.to_string(),
        })
    }
}

/// Apibay search provider
pub struct ApibayProvider {
    base_url: String,
    client: reqwest::Client,
}

impl ApibayProvider {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Create a provider with a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(reqwest::Client::new(), base_url)
    }
}

#[async_trait]
impl SearchProvider for ApibayProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchItem>, SearchError> {
        let url = format!(
            "{}/q.php?q={}&cat=0",
            self.base_url,
            urlencoding::encode(query)
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                provider: PROVIDER,
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        parse_response(&text)
    }
}

/// Parse a q.php body into search items
pub fn parse_response(body: &str) -> Result<Vec<SearchItem>, SearchError> {
    let entries: Vec<ApibayEntry> =
        serde_json::from_str(body).map_err(|e| SearchError::InvalidResponse {
            provider: PROVIDER,
            reason: format!("JSON parse error: {}", e),
        })?;

    Ok(entries
        .into_iter()
        .filter_map(|e| e.into_search_item())
        .collect())
}
