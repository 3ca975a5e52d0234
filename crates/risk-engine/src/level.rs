//! Severity Level Bucketing

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity category derived from a risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
    /// Safety net for scores outside [1, 25]; unreachable for validated input
    Unknown,
}

impl RiskLevel {
    /// Bucket a score into its severity level
    pub fn from_score(score: i64) -> Self {
        match score {
            1..=5 => RiskLevel::Low,
            6..=12 => RiskLevel::Medium,
            13..=18 => RiskLevel::High,
            19..=25 => RiskLevel::Critical,
            _ => RiskLevel::Unknown,
        }
    }

    /// Stable string form, as persisted and transported
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
            RiskLevel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
