use std::time::Duration;

use super::config::StoreConfig;

/// Client for reading alert rows from the hosted store
#[derive(Debug, Clone)]
pub struct StoreClient {
    config: StoreConfig,
    http_client: reqwest::Client,
}

impl StoreClient {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            config,
        }
    }

    /// Fetch every row from the alert table, unfiltered.
    ///
    /// Rows are opaque to this service and passed through untouched. One
    /// request, no retry, no caching.
    pub async fn fetch_all(&self) -> Result<Vec<serde_json::Value>, StoreError> {
        let url = self.config.rest_url();

        let response = self
            .http_client
            .get(&url)
            .query(&[("select", "*")])
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(StoreError::Remote(error_text));
        }

        response
            .json()
            .await
            .map_err(|e| StoreError::Deserialization(e.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Store error: {0}")]
    Remote(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}
