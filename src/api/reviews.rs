use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{debug, warn};

use crate::models::ReviewRecord;

/// Stateless client for the review endpoint.
///
/// No caching, no retry, no deduplication: every call is an independent
/// round trip. The two parameters are passed through as-is; the server
/// validates them.
pub struct ReviewClient {
    client: Client,
    base_url: String,
}

impl ReviewClient {
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

    /// Fetch all reviews for a listing in a given city
    pub async fn get_reviews(&self, listing_id: &str, city: &str) -> Result<Vec<ReviewRecord>> {
        let url = format!("{}/getReviews", self.base_url);

        debug!("Fetching reviews for listing {} in {}", listing_id, city);

        let response = self
            .client
            .get(&url)
            .query(&[("listing_id", listing_id), ("city", city)])
            .send()
            .await
            .context("Review request failed")?;

        if !response.status().is_success() {
            warn!("Review endpoint returned status: {}", response.status());
            anyhow::bail!("Review fetch failed: {}", response.status());
        }

        let reviews: Vec<ReviewRecord> = response
            .json()
            .await
            .context("Failed to parse review response")?;

        Ok(reviews)
    }
}
