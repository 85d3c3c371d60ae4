//! Configuration for a screening run

use resumatch_index::TfidfConfig;
use resumatch_report::{EXPORT_FILE_NAME, Thresholds};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Vocabulary cap and n-gram range of the term space
    pub tfidf: TfidfConfig,

    /// Percentage cut-offs for the high and medium tiers
    pub thresholds: Thresholds,

    /// Default name of the CSV artifact
    pub export_file_name: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            tfidf: TfidfConfig::new(),
            thresholds: Thresholds::new(),
            export_file_name: EXPORT_FILE_NAME.to_string(),
        }
    }

    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.tfidf.max_features = max_features;
        self
    }

    pub fn with_thresholds(mut self, high: f64, medium: f64) -> Self {
        self.thresholds = Thresholds { high, medium };
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
