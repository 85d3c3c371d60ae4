//! Plain-text extraction from uploaded resume documents

mod document;
mod pdf;

#[cfg(any(test, feature = "test-util"))]
pub mod fixtures;

pub use document::{DocumentKind, ExtractError, ExtractedDocument, detect_kind, extract, extract_text};
