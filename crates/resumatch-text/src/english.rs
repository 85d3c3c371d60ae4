//! Bundled English language model

use crate::lexicon::Lexicon;
use crate::model::{LanguageModel, ModelError, Token};
use crate::tokenize::tokenize;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

static STOP_WORDS: &str = include_str!("../data/stopwords.txt");
static LEMMAS: &str = include_str!("../data/lemmas.tsv");

#[derive(Debug, Clone)]
pub struct EnglishModel {
    stop_words: HashSet<String>,
    lexicon: Lexicon,
}

impl EnglishModel {
    /// Load the bundled data, extended by an optional user lexicon
    pub fn load(lexicon: Option<&Path>) -> Result<Self, ModelError> {
        let mut merged = Lexicon::parse(LEMMAS)?;

        if let Some(path) = lexicon {
            let source =
                std::fs::read_to_string(path).map_err(|source| ModelError::Unavailable {
                    path: path.to_path_buf(),
                    source,
                })?;
            merged.merge(Lexicon::parse(&source)?)?;
        }

        let stop_words: HashSet<String> =
            STOP_WORDS.split_whitespace().map(str::to_string).collect();

        debug!(
            stop_words = stop_words.len(),
            lexicon_entries = merged.len(),
            "english model loaded"
        );

        Ok(Self {
            stop_words,
            lexicon: merged,
        })
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }
}

impl LanguageModel for EnglishModel {
    fn analyze(&self, text: &str) -> Vec<Token> {
        tokenize(text)
            .into_iter()
            .map(|surface| {
                let lower = surface.to_lowercase();
                let lemma = self.lexicon.lemmatize(&lower);
                // an inflection of a stop word ("made" / "make") counts as one
                let is_stop = self.stop_words.contains(&lower) || self.stop_words.contains(&lemma);
                Token {
                    is_alpha: !surface.is_empty() && surface.chars().all(char::is_alphabetic),
                    is_stop,
                    lemma,
                    text: surface,
                }
            })
            .collect()
    }
}
