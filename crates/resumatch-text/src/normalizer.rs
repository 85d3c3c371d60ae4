//! Text -> canonical bag of lexical tokens

use crate::model::LanguageModel;
use std::sync::Arc;

/// Keeps alphabetic, non-stop tokens and emits their lower-cased lemmas.
///
/// The model is injected rather than looked up globally; clone the
/// normalizer freely, the model itself is shared.
#[derive(Debug)]
pub struct Normalizer<M: LanguageModel> {
    model: Arc<M>,
}

impl<M: LanguageModel> Clone for Normalizer<M> {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
        }
    }
}

impl<M: LanguageModel> Normalizer<M> {
    pub fn new(model: Arc<M>) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn tokens(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        self.model
            .analyze(text)
            .into_iter()
            .filter(|token| token.is_alpha && !token.is_stop)
            .map(|token| token.lemma.to_lowercase())
            .collect()
    }

    /// Space-joined [`tokens`](Self::tokens)
    pub fn normalize(&self, text: &str) -> String {
        self.tokens(text).join(" ")
    }
}
