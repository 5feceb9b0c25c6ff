//! Messaging gateway client

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Messaging gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the gateway API
    pub base_url: String,
    /// Gateway account username
    pub username: String,
    /// Gateway API key, sent as the `apiKey` header
    pub api_key: String,
}

impl GatewayConfig {
    /// Create a gateway config from environment variables
    /// FLOODWATCH_SMS_URL=https://api.africastalking.com
    /// FLOODWATCH_SMS_USERNAME=sandbox
    /// FLOODWATCH_SMS_API_KEY=gateway-key
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("FLOODWATCH_SMS_URL").unwrap_or(defaults.base_url),
            username: std::env::var("FLOODWATCH_SMS_USERNAME").unwrap_or(defaults.username),
            api_key: std::env::var("FLOODWATCH_SMS_API_KEY").unwrap_or(defaults.api_key),
        }
    }

    /// Full URL of the messaging endpoint
    pub fn messaging_url(&self) -> String {
        format!("{}/version1/messaging", self.base_url.trim_end_matches('/'))
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.africastalking.com".to_string(),
            username: "sandbox".to_string(),
            api_key: String::new(),
        }
    }
}

/// Client for dispatching SMS notifications through the gateway
#[derive(Debug, Clone)]
pub struct SmsGateway {
    config: GatewayConfig,
    http_client: reqwest::Client,
}

impl SmsGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            config,
        }
    }

    /// Dispatch one message to the given recipients.
    ///
    /// One form-encoded POST per call; recipients are joined into the
    /// gateway's comma-separated `to` field. No retry or queueing.
    pub async fn send(
        &self,
        recipients: &[String],
        message: &str,
    ) -> Result<DispatchReceipt, SmsError> {
        let url = self.config.messaging_url();
        let to = recipients.join(",");
        let params = [
            ("username", self.config.username.as_str()),
            ("to", to.as_str()),
            ("message", message),
        ];

        let response = self
            .http_client
            .post(&url)
            .header("apiKey", &self.config.api_key)
            .header("Accept", "application/json")
            .form(&params)
            .send()
            .await
            .map_err(|e| SmsError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SmsError::Gateway(error_text));
        }

        let wire: WireResponse = response
            .json()
            .await
            .map_err(|e| SmsError::Deserialization(e.to_string()))?;

        Ok(wire.into())
    }
}

/// Gateway acknowledgment for a dispatch request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchReceipt {
    /// Gateway summary line, e.g. "Sent to 1/1"
    pub message: String,
    /// Per-recipient delivery statuses
    pub recipients: Vec<RecipientStatus>,
}

/// Delivery status for one recipient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipientStatus {
    pub number: String,
    pub status: String,
    pub status_code: i32,
    pub cost: Option<String>,
    pub message_id: Option<String>,
}

// Wire format: the gateway nests everything under "SMSMessageData" and uses
// camelCase / PascalCase field names.

#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(rename = "SMSMessageData")]
    data: WireMessageData,
}

#[derive(Debug, Deserialize)]
struct WireMessageData {
    #[serde(rename = "Message")]
    message: String,
    #[serde(rename = "Recipients", default)]
    recipients: Vec<WireRecipient>,
}

#[derive(Debug, Deserialize)]
struct WireRecipient {
    number: String,
    status: String,
    #[serde(rename = "statusCode")]
    status_code: i32,
    cost: Option<String>,
    #[serde(rename = "messageId")]
    message_id: Option<String>,
}

impl From<WireResponse> for DispatchReceipt {
    fn from(wire: WireResponse) -> Self {
        Self {
            message: wire.data.message,
            recipients: wire
                .data
                .recipients
                .into_iter()
                .map(|r| RecipientStatus {
                    number: r.number,
                    status: r.status,
                    status_code: r.status_code,
                    cost: r.cost,
                    message_id: r.message_id,
                })
                .collect(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SmsError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messaging_url() {
        let config = GatewayConfig {
            base_url: "https://api.africastalking.com".to_string(),
            ..GatewayConfig::default()
        };
        assert_eq!(
            config.messaging_url(),
            "https://api.africastalking.com/version1/messaging"
        );
    }

    #[test]
    fn test_messaging_url_trims_trailing_slash() {
        let config = GatewayConfig {
            base_url: "https://gateway.example.com/".to_string(),
            ..GatewayConfig::default()
        };
        assert_eq!(
            config.messaging_url(),
            "https://gateway.example.com/version1/messaging"
        );
    }

    #[test]
    fn test_receipt_from_wire_response() {
        let raw = r#"{
            "SMSMessageData": {
                "Message": "Sent to 1/1 Total Cost: KES 0.8",
                "Recipients": [{
                    "number": "+254711000111",
                    "status": "Success",
                    "statusCode": 101,
                    "cost": "KES 0.8",
                    "messageId": "ATXid_abc123"
                }]
            }
        }"#;

        let wire: WireResponse = serde_json::from_str(raw).unwrap();
        let receipt: DispatchReceipt = wire.into();

        assert_eq!(receipt.message, "Sent to 1/1 Total Cost: KES 0.8");
        assert_eq!(receipt.recipients.len(), 1);
        assert_eq!(receipt.recipients[0].number, "+254711000111");
        assert_eq!(receipt.recipients[0].status, "Success");
        assert_eq!(receipt.recipients[0].status_code, 101);
        assert_eq!(receipt.recipients[0].message_id.as_deref(), Some("ATXid_abc123"));
    }

    #[test]
    fn test_receipt_without_recipients() {
        // Rejected requests come back with a summary but no recipient list
        let raw = r#"{"SMSMessageData": {"Message": "InvalidSenderId"}}"#;

        let wire: WireResponse = serde_json::from_str(raw).unwrap();
        let receipt: DispatchReceipt = wire.into();

        assert_eq!(receipt.message, "InvalidSenderId");
        assert!(receipt.recipients.is_empty());
    }
}
