//! Joint TF-IDF term space and cosine ranking

mod error;
mod ranker;
mod sparse;
mod tfidf;

pub use error::IndexError;
pub use ranker::{Scored, cosine_similarity, rank};
pub use sparse::SparseVector;
pub use tfidf::{TermSpace, TfidfConfig, analyze, fit_transform};
