//! Rainfall flood-risk classification
//!
//! A fixed three-tier threshold rule mapping a rainfall measurement to a
//! risk tier with a recommended action. Pure and stateless: any number of
//! callers may classify concurrently without coordination.

use serde::{Deserialize, Serialize};

/// Risk tier derived from a rainfall threshold comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// Classify a rainfall measurement in millimeters.
    ///
    /// Thresholds are strict `>` comparisons in sequence: exactly 50.0 mm is
    /// Moderate and exactly 20.0 mm is Low. Negative input (and NaN, for
    /// which every comparison is false) falls through to Low.
    pub fn from_rainfall(rainfall_mm: f64) -> Self {
        if rainfall_mm > 50.0 {
            RiskTier::High
        } else if rainfall_mm > 20.0 {
            RiskTier::Moderate
        } else {
            RiskTier::Low
        }
    }

    /// Human-readable risk label
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Moderate => "Moderate Flood Risk",
            RiskTier::High => "High Flood Risk",
        }
    }

    /// Recommended action for this tier
    pub fn action(&self) -> &'static str {
        match self {
            RiskTier::Low => "No immediate action",
            RiskTier::Moderate => "Stay alert",
            RiskTier::High => "Move to higher ground",
        }
    }
}

/// A single-shot risk assessment for one measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub rainfall_mm: f64,
    pub tier: RiskTier,
}

/// Assess flood risk for a rainfall measurement
pub fn assess(rainfall_mm: f64) -> RiskAssessment {
    RiskAssessment {
        rainfall_mm,
        tier: RiskTier::from_rainfall(rainfall_mm),
    }
}
