//! Outbound SMS dispatch through a hosted messaging gateway
//!
//! Dispatch requests are forwarded to the gateway as-is; delivery and retry
//! behavior belong to the gateway, not this service.

pub mod gateway;

pub use gateway::{DispatchReceipt, GatewayConfig, RecipientStatus, SmsError, SmsGateway};
