use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::models::{SearchCriteria, SearchResults};

/// Client for the listing search endpoint.
///
/// Each call is a single, non-retried GET; the caller decides what to do
/// with a failure.
pub struct SearchClient {
    client: Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Issue one search request with the criteria serialized as query
    /// parameters. The criteria are expected to be validated already.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<SearchResults> {
        let url = format!("{}/search", self.base_url);
        let query = criteria.to_query();

        debug!("Searching {} with {} query pairs", url, query.len());

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .context("Search request failed")?;

        if !response.status().is_success() {
            warn!("Search endpoint returned status: {}", response.status());
            anyhow::bail!("Search failed: {}", response.status());
        }

        let results: SearchResults = response
            .json()
            .await
            .context("Failed to parse search response")?;

        info!("Search returned {} listings", results.len());

        Ok(results)
    }
}
