//! Read-only access to the hosted alert table
//!
//! Alert records live entirely in an externally hosted relational store;
//! this module reads them over the store's REST interface and passes the
//! rows through as opaque JSON.

pub mod client;
pub mod config;

pub use client::{StoreClient, StoreError};
pub use config::StoreConfig;
