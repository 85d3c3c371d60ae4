//! PDF page text via lopdf

use crate::document::ExtractError;
use lopdf::Document;
use std::panic::{self, AssertUnwindSafe};
use tracing::debug;

/// Text of every page in ascending page order.
///
/// Pages without a usable text layer (scans, broken content streams)
/// contribute an empty string. Only a document that cannot be parsed
/// at all is an error.
pub fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    // lopdf can panic on hostile input; treat that like a parse failure
    let loaded = panic::catch_unwind(AssertUnwindSafe(|| Document::load_mem(bytes)))
        .map_err(|_| ExtractError::Malformed("parser panicked".to_string()))?;
    let doc = loaded.map_err(|e| ExtractError::Malformed(e.to_string()))?;

    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    let mut pages = Vec::with_capacity(page_numbers.len());

    for number in page_numbers {
        let text = panic::catch_unwind(AssertUnwindSafe(|| doc.extract_text(&[number])));
        match text {
            Ok(Ok(text)) => pages.push(text),
            Ok(Err(e)) => {
                debug!(page = number, error = %e, "page has no extractable text");
                pages.push(String::new());
            }
            Err(_) => {
                debug!(page = number, "page extraction panicked");
                pages.push(String::new());
            }
        }
    }

    Ok(pages)
}
