//! Ranked result table, display tiers and CSV export

mod error;
mod export;
mod table;
mod tier;

pub use error::ReportError;
pub use export::{EXPORT_FILE_NAME, EXPORT_MIME_TYPE, ExportRow, parse_csv};
pub use table::{RankedRow, RankedTable, percentage};
pub use tier::{Thresholds, Tier};
