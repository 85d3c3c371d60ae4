//! Resume screening pipeline: extract, normalize, vectorize, rank, format

mod candidate;
mod config;
mod error;
mod screener;

pub use candidate::{Candidate, Notice, NoticeReason};
pub use config::Config;
pub use error::ScreenError;
pub use screener::{Screener, ScreeningOutcome};
