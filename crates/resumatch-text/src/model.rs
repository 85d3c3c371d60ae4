//! The language model seam used by the normalizer

use std::path::PathBuf;
use thiserror::Error;

/// One analyzed token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface form as it appeared in the input
    pub text: String,
    /// Dictionary base form
    pub lemma: String,
    /// Every character is alphabetic
    pub is_alpha: bool,
    /// Function word of the working language
    pub is_stop: bool,
}

/// Tokenization, lemmatization and stopword classification.
///
/// Implementations are loaded once per process and shared read-only,
/// so `analyze` takes `&self` and the trait requires `Send + Sync`.
pub trait LanguageModel: Send + Sync {
    fn analyze(&self, text: &str) -> Vec<Token>;
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("language model data unavailable at {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid lexicon entry on line {line}: {reason}")]
    InvalidLexicon { line: usize, reason: String },

    #[error("lexicon entries for `{word}` form a cycle")]
    LexiconCycle { word: String },
}
