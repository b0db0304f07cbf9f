//! Torrent indexer search
//!
//! - Apibay: The Pirate Bay JSON API
//! - 1337x: HTML search result pages
//!
//! `Searcher` queries a configured provider set in order and concatenates
//! what each one returns. `filter_available` drops poorly seeded results.

pub mod apibay;
pub mod x1337;

pub use apibay::ApibayProvider;
pub use x1337::X1337Provider;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::models::SearchItem;

/// Search error types
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("{provider} returned HTTP {status}")]
    Status { provider: &'static str, status: u16 },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse {
        provider: &'static str,
        reason: String,
    },

    #[error("Unknown search provider: {0}")]
    UnknownProvider(String),

    #[error("No search providers configured")]
    NoProviders,

    #[error("All search providers failed (last error: {0})")]
    AllFailed(Box<SearchError>),
}

/// A single torrent indexer
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Short provider name for logs
    fn name(&self) -> &'static str;

    /// Search the indexer for a free-text query
    async fn search(&self, query: &str) -> Result<Vec<SearchItem>, SearchError>;
}

/// Search capability used by the orchestrator
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchItem>, SearchError>;
}

/// Build the HTTP client shared by all providers
pub fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("freeflix/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default()
}

/// Queries every provider of a set, in order
pub struct Searcher {
    providers: Vec<Box<dyn SearchProvider>>,
}

impl Searcher {
    pub fn new(providers: Vec<Box<dyn SearchProvider>>) -> Self {
        Self { providers }
    }

    /// Build the provider set named in the config
    pub fn from_config(config: &Config) -> Result<Self, SearchError> {
        let client = http_client(config.http_timeout());
        let mut providers: Vec<Box<dyn SearchProvider>> = Vec::new();

        for name in &config.providers {
            match name.to_ascii_lowercase().as_str() {
                "apibay" | "tpb" => providers.push(Box::new(ApibayProvider::new(
                    client.clone(),
                    config.apibay_url.clone(),
                ))),
                "1337x" => providers.push(Box::new(X1337Provider::new(
                    client.clone(),
                    config.x1337_url.clone(),
                ))),
                _ => return Err(SearchError::UnknownProvider(name.clone())),
            }
        }

        if providers.is_empty() {
            return Err(SearchError::NoProviders);
        }
        Ok(Self::new(providers))
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }
}

#[async_trait]
impl SearchBackend for Searcher {
    async fn search(&self, query: &str) -> Result<Vec<SearchItem>, SearchError> {
        let mut items = Vec::new();
        let mut last_error = None;
        let mut any_ok = false;

        for provider in &self.providers {
            match provider.search(query).await {
                Ok(found) => {
                    debug!(provider = provider.name(), count = found.len(), "search done");
                    any_ok = true;
                    items.extend(found);
                }
                Err(e) => {
                    warn!(provider = provider.name(), error = %e, "search provider failed");
                    last_error = Some(e);
                }
            }
        }

        match (any_ok, last_error) {
            (false, Some(e)) => Err(SearchError::AllFailed(Box::new(e))),
            (false, None) => Err(SearchError::NoProviders),
            _ => Ok(items),
        }
    }
}

/// Keep only results with more than `min_peers` peers
pub fn filter_available(items: Vec<SearchItem>, min_peers: u32) -> Vec<SearchItem> {
    items.into_iter().filter(|i| i.peers > min_peers).collect()
}
