//! Uploaded documents and the per-candidate notices of a run

use resumatch_extract::ExtractError;
use serde::Serialize;
use std::fmt;

/// One uploaded document. Names are not required to be unique.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub name: String,
    pub content: Vec<u8>,
}

impl Candidate {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum NoticeReason {
    /// The document could not be read
    Extraction(String),
    /// Nothing but whitespace was extracted
    NoText,
    /// Text was extracted but every token was filtered out
    NoTerms,
}

impl From<ExtractError> for NoticeReason {
    fn from(err: ExtractError) -> Self {
        NoticeReason::Extraction(err.to_string())
    }
}

/// A candidate dropped from the run; never fatal on its own
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub candidate: String,
    /// Upload position
    pub position: usize,
    pub reason: NoticeReason,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: candidate produced no usable text", self.candidate)?;
        match &self.reason {
            NoticeReason::Extraction(detail) => write!(f, " ({detail})"),
            NoticeReason::NoText => write!(f, " (document is empty or image-only)"),
            NoticeReason::NoTerms => write!(f, " (no terms left after normalization)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_display() {
        let notice = Notice {
            candidate: "scan.pdf".to_string(),
            position: 2,
            reason: NoticeReason::NoText,
        };
        assert_eq!(
            notice.to_string(),
            "scan.pdf: candidate produced no usable text (document is empty or image-only)"
        );
    }

    #[test]
    fn test_extract_error_becomes_reason() {
        let reason = NoticeReason::from(ExtractError::UnsupportedFormat);
        assert!(matches!(reason, NoticeReason::Extraction(ref d) if d.contains("neither")));
    }
}
