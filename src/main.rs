//! Floodwatch Server
//!
//! Run with: cargo run
//!
//! Environment variables:
//! - FLOODWATCH_HOST: Bind address (default: 0.0.0.0)
//! - FLOODWATCH_PORT: Port number (default: 8000)
//! - FLOODWATCH_STORE_URL: Base URL of the hosted alert store
//! - FLOODWATCH_STORE_API_KEY: API key for the alert store
//! - FLOODWATCH_STORE_TABLE: Alert table name (default: alerts)
//! - FLOODWATCH_SMS_URL: Base URL of the SMS gateway
//! - FLOODWATCH_SMS_USERNAME: Gateway account username (default: sandbox)
//! - FLOODWATCH_SMS_API_KEY: Gateway API key
//! - RUST_LOG: Log level (default: info)

use floodwatch::api::{run_server, ServerConfig};
use floodwatch::sms::GatewayConfig;
use floodwatch::store::StoreConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "floodwatch=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse basic configuration from environment
    let host = std::env::var("FLOODWATCH_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("FLOODWATCH_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let config = ServerConfig {
        host,
        port,
        store: StoreConfig::from_env(),
        sms: GatewayConfig::from_env(),
    };

    tracing::info!("Floodwatch configuration:");
    tracing::info!("  Host: {}:{}", config.host, config.port);
    tracing::info!(
        "  Alert store: {} (table: {})",
        config.store.base_url,
        config.store.table
    );
    tracing::info!(
        "  SMS gateway: {} (account: {})",
        config.sms.base_url,
        config.sms.username
    );

    println!(
        r#"
  ___ _              _             _      _
 | __| |___  ___  __| |_ __ ____ _| |_ __| |_
 | _|| / _ \/ _ \/ _` \ V  V / _` |  _/ _| ' \
 |_| |_\___/\___/\__,_|\_/\_/\__,_|\__\__|_||_|

 Flood Alert & Risk Classification Backend
 Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );

    run_server(config).await
}
