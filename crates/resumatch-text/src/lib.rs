//! Lemmatizing, stopword-free text normalization

mod english;
mod lexicon;
mod model;
mod normalizer;
mod tokenize;

pub use english::EnglishModel;
pub use lexicon::Lexicon;
pub use model::{LanguageModel, ModelError, Token};
pub use normalizer::Normalizer;
pub use tokenize::tokenize;
