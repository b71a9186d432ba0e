use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::api::traits::CityDirectory;

/// HTTP implementation of the city catalog lookup
pub struct CityDirectoryClient {
    client: Client,
    base_url: String,
}

impl CityDirectoryClient {
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
}

#[async_trait]
impl CityDirectory for CityDirectoryClient {
    async fn fetch_cities(&self) -> Result<Vec<String>> {
        // Route spelling matches the backend
        let url = format!("{}/getCitites", self.base_url);

        debug!("Fetching city catalog from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch city catalog")?;

        if !response.status().is_success() {
            warn!("City catalog returned status: {}", response.status());
            anyhow::bail!("Failed to fetch city catalog: {}", response.status());
        }

        let cities: Vec<String> = response
            .json()
            .await
            .context("Failed to parse city catalog")?;

        info!("Loaded {} cities from catalog", cities.len());

        Ok(cities)
    }
}
