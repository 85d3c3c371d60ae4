//! CSV export of the ranked table

use crate::error::ReportError;
use crate::table::RankedTable;
use serde::Deserialize;
use std::path::Path;

pub const EXPORT_FILE_NAME: &str = "ranked_resumes.csv";
pub const EXPORT_MIME_TYPE: &str = "text/csv";

const HEADER: [&str; 3] = ["Resume", "Score", "Match %"];

/// One parsed export line
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "Resume")]
    pub name: String,
    #[serde(rename = "Score")]
    pub score: f64,
    #[serde(rename = "Match %")]
    pub percentage: f64,
}

impl RankedTable {
    /// Header row plus one row per candidate, no index column.
    ///
    /// Floats use shortest round-trip formatting so parsing the export
    /// recovers the exact values.
    pub fn to_csv(&self) -> Result<Vec<u8>, ReportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(HEADER)?;
        for row in self.rows() {
            let score = row.score.to_string();
            let percentage = row.percentage.to_string();
            writer.write_record([row.name.as_str(), score.as_str(), percentage.as_str()])?;
        }
        writer
            .into_inner()
            .map_err(|e| ReportError::Io(e.into_error()))
    }

    /// Write the export atomically (temp file + rename)
    pub fn write_csv(&self, path: &Path) -> Result<(), ReportError> {
        let data = self.to_csv()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let temp_path = path.with_extension("csv.tmp");
        std::fs::write(&temp_path, data)?;
        if let Err(e) = std::fs::rename(&temp_path, path) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(e.into());
        }
        Ok(())
    }
}

pub fn parse_csv(bytes: &[u8]) -> Result<Vec<ExportRow>, ReportError> {
    let mut reader = csv::Reader::from_reader(bytes);
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}
