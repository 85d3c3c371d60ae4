//! The ranked result table

use crate::error::ReportError;
use crate::tier::{Thresholds, Tier};
use serde::Serialize;
use std::fmt::Write as _;

const BAR_WIDTH: usize = 20;

/// `score * 100` rounded to two decimal places, halves to even
pub fn percentage(score: f64) -> f64 {
    (score * 100.0 * 100.0).round_ties_even() / 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRow {
    /// 1-indexed
    pub rank: usize,
    pub name: String,
    pub score: f64,
    pub percentage: f64,
    pub tier: Tier,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankedTable {
    rows: Vec<RankedRow>,
}

impl RankedTable {
    /// Build from `(name, score)` pairs already in ranked order
    pub fn from_scores(scores: Vec<(String, f64)>, thresholds: &Thresholds) -> Self {
        let rows = scores
            .into_iter()
            .enumerate()
            .map(|(i, (name, score))| {
                let percentage = percentage(score);
                RankedRow {
                    rank: i + 1,
                    name,
                    score,
                    percentage,
                    tier: Tier::from_percentage(percentage, thresholds),
                }
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[RankedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One line per candidate with a text bar for the match percentage
    pub fn render_text(&self) -> String {
        let name_width = self.rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
        let mut out = String::new();

        for row in &self.rows {
            let filled = ((row.percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
            let filled = filled.min(BAR_WIDTH);
            let _ = writeln!(
                out,
                "Rank {:>2}  {:<name_width$}  [{}{}] {:>6.2}%  {}",
                row.rank,
                row.name,
                "#".repeat(filled),
                "-".repeat(BAR_WIDTH - filled),
                row.percentage,
                row.tier,
            );
        }
        out
    }
}
