use serde::{Deserialize, Serialize};

/// Hosted alert store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the hosted store, without a trailing path
    pub base_url: String,
    /// Service API key, sent as both the `apikey` header and the bearer token
    pub api_key: String,
    /// Name of the table holding alert records
    pub table: String,
}

impl StoreConfig {
    /// Create a store config from environment variables
    /// FLOODWATCH_STORE_URL=https://project-ref.example.co
    /// FLOODWATCH_STORE_API_KEY=service-key
    /// FLOODWATCH_STORE_TABLE=alerts
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("FLOODWATCH_STORE_URL").unwrap_or(defaults.base_url),
            api_key: std::env::var("FLOODWATCH_STORE_API_KEY").unwrap_or(defaults.api_key),
            table: std::env::var("FLOODWATCH_STORE_TABLE").unwrap_or(defaults.table),
        }
    }

    /// Full URL of the table's REST endpoint
    pub fn rest_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            self.table
        )
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            api_key: String::new(),
            table: "alerts".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_url() {
        let config = StoreConfig {
            base_url: "https://project-ref.example.co".to_string(),
            api_key: "key".to_string(),
            table: "alerts".to_string(),
        };
        assert_eq!(
            config.rest_url(),
            "https://project-ref.example.co/rest/v1/alerts"
        );
    }

    #[test]
    fn test_rest_url_trims_trailing_slash() {
        let config = StoreConfig {
            base_url: "https://project-ref.example.co/".to_string(),
            ..StoreConfig::default()
        };
        assert_eq!(
            config.rest_url(),
            "https://project-ref.example.co/rest/v1/alerts"
        );
    }

    #[test]
    fn test_default_table_is_alerts() {
        assert_eq!(StoreConfig::default().table, "alerts");
    }
}
