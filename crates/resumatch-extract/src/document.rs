//! Format detection and the extraction entry points

use crate::pdf;
use thiserror::Error;

const PDF_MAGIC: &[u8] = b"%PDF-";
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Document formats the extractor understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("document is neither a PDF nor UTF-8 text")]
    UnsupportedFormat,

    #[error("malformed PDF: {0}")]
    Malformed(String),
}

/// Text pulled out of one document
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub kind: DocumentKind,
    /// Page count (1 for plain text)
    pub pages: usize,
    pub text: String,
}

impl ExtractedDocument {
    /// True when nothing but whitespace was extracted
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Sniff the format from the leading bytes
pub fn detect_kind(bytes: &[u8]) -> Option<DocumentKind> {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    if bytes[start..].starts_with(PDF_MAGIC) {
        return Some(DocumentKind::Pdf);
    }
    if std::str::from_utf8(bytes).is_ok() {
        return Some(DocumentKind::PlainText);
    }
    None
}

/// Extract the visible text of a document, pages concatenated in order
pub fn extract(bytes: &[u8]) -> Result<ExtractedDocument, ExtractError> {
    match detect_kind(bytes) {
        Some(DocumentKind::Pdf) => {
            let pages = pdf::extract_pages(bytes)?;
            Ok(ExtractedDocument {
                kind: DocumentKind::Pdf,
                pages: pages.len(),
                text: pages.concat(),
            })
        }
        Some(DocumentKind::PlainText) => {
            let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
            // detect_kind already validated the encoding
            let text = String::from_utf8_lossy(body).into_owned();
            Ok(ExtractedDocument {
                kind: DocumentKind::PlainText,
                pages: 1,
                text,
            })
        }
        None => Err(ExtractError::UnsupportedFormat),
    }
}

/// Convenience wrapper returning only the text
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    extract(bytes).map(|doc| doc.text)
}
