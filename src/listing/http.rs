use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::Config;
use crate::filter::PropertyFilter;
use crate::listing::traits::ListingSource;
use crate::listing::ListingError;
use crate::models::ResultSet;

/// Listing source backed by the live property API
pub struct HttpListingSource {
    client: Client,
    endpoint: String,
}

impl HttpListingSource {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("arrienda-search/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.api_base.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ListingSource for HttpListingSource {
    async fn search(&self, filter: &PropertyFilter) -> Result<ResultSet, ListingError> {
        let pairs = filter.to_query_pairs();
        debug!("GET {} with {} filter params", self.endpoint, pairs.len());

        let response = self
            .client
            .get(&self.endpoint)
            .query(&pairs)
            .send()
            .await
            .map_err(ListingError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Listing endpoint returned status: {status}");
            return Err(ListingError::Status(status.as_u16()));
        }

        let set = response
            .json::<ResultSet>()
            .await
            .map_err(ListingError::Decode)?;

        debug!("Received {} of {} listings", set.items.len(), set.count);
        Ok(set)
    }

    fn source_name(&self) -> &'static str {
        "misiones-arrienda-api"
    }
}
