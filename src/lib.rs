//! Floodwatch: Flood Alert & Risk Classification Backend
//!
//! A small service backend that proxies an externally hosted alert feed,
//! forwards SMS notifications through a hosted messaging gateway, and
//! classifies flood risk from rainfall measurements using a fixed
//! three-tier threshold rule.
//!
//! # Features
//!
//! - **Alert Feed Proxy**: unfiltered read-all against a hosted relational
//!   table, rows passed through as opaque JSON
//! - **SMS Dispatch**: form-encoded dispatch requests to a hosted messaging
//!   gateway, with typed delivery receipts
//! - **Risk Classification**: pure three-tier rainfall threshold rule
//!
//! # Example
//!
//! ```
//! use floodwatch::risk;
//!
//! let assessment = risk::assess(75.0);
//! assert_eq!(assessment.tier.label(), "High Flood Risk");
//! assert_eq!(assessment.tier.action(), "Move to higher ground");
//! ```

pub mod api;
pub mod risk;
pub mod sms;
pub mod store;

// Re-export commonly used types
pub use risk::{assess, RiskAssessment, RiskTier};
pub use sms::{SmsError, SmsGateway};
pub use store::{StoreClient, StoreError};
