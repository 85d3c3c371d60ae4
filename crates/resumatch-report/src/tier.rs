//! Display tiers derived from match percentage

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// At or above the high threshold
    High,
    Medium,
    Low,
}

impl Tier {
    pub fn from_percentage(percentage: f64, thresholds: &Thresholds) -> Self {
        if percentage >= thresholds.high {
            Tier::High
        } else if percentage >= thresholds.medium {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::High => "high",
            Tier::Medium => "medium",
            Tier::Low => "low",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage cut-offs, both inclusive lower bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub high: f64,
    pub medium: f64,
}

impl Thresholds {
    pub fn new() -> Self {
        Self {
            high: 80.0,
            medium: 50.0,
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new()
    }
}
