//! TF-IDF term space fitted jointly over one batch

use crate::error::IndexError;
use crate::sparse::SparseVector;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

static TOKEN_RE: OnceLock<Regex> = OnceLock::new();

fn token_re() -> &'static Regex {
    TOKEN_RE.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TfidfConfig {
    /// Vocabulary cap, by total count across the batch
    pub max_features: usize,
    /// Inclusive n-gram lengths
    pub ngram_range: (usize, usize),
}

impl TfidfConfig {
    pub fn new() -> Self {
        Self {
            max_features: 5000,
            ngram_range: (1, 2),
        }
    }

    pub fn validate(&self) -> Result<(), IndexError> {
        let (min_n, max_n) = self.ngram_range;
        if self.max_features == 0 {
            return Err(IndexError::InvalidConfig(
                "max_features must be at least 1".to_string(),
            ));
        }
        if min_n == 0 || min_n > max_n {
            return Err(IndexError::InvalidConfig(format!(
                "invalid n-gram range {min_n}..={max_n}"
            )));
        }
        Ok(())
    }
}

impl Default for TfidfConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Lower-case, pull runs of two or more word characters, emit n-grams
/// joined by a single space.
pub fn analyze(text: &str, ngram_range: (usize, usize)) -> Vec<String> {
    let lower = text.to_lowercase();
    let words: Vec<&str> = token_re().find_iter(&lower).map(|m| m.as_str()).collect();

    let (min_n, max_n) = ngram_range;
    let mut terms = Vec::new();
    for n in min_n..=max_n {
        if n == 0 || n > words.len() {
            continue;
        }
        terms.extend(words.windows(n).map(|w| w.join(" ")));
    }
    terms
}

fn count_terms(text: &str, ngram_range: (usize, usize)) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for term in analyze(text, ngram_range) {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

/// Fitted vocabulary and IDF weights. Lives for a single batch.
#[derive(Debug, Clone)]
pub struct TermSpace {
    config: TfidfConfig,
    vocab: HashMap<String, usize>,
    terms: Vec<String>,
    idf: Vec<f64>,
}

impl TermSpace {
    /// Fit over `documents` (query first, then candidates)
    pub fn fit<S: AsRef<str>>(config: TfidfConfig, documents: &[S]) -> Result<Self, IndexError> {
        fit_transform(config, documents).map(|(space, _)| space)
    }

    fn from_counts(config: TfidfConfig, counts: &[HashMap<String, usize>]) -> Self {
        let mut total: HashMap<&str, usize> = HashMap::new();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for doc in counts {
            for (term, &count) in doc {
                *total.entry(term.as_str()).or_insert(0) += count;
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(&str, usize)> = total.into_iter().collect();
        if ranked.len() > config.max_features {
            ranked.sort_by_key(|&(term, count)| (Reverse(count), term));
            ranked.truncate(config.max_features);
        }
        let mut terms: Vec<String> = ranked.into_iter().map(|(t, _)| t.to_string()).collect();
        terms.sort();

        let doc_count = counts.len();
        let idf: Vec<f64> = terms
            .iter()
            .map(|term| {
                let df = doc_freq.get(term.as_str()).copied().unwrap_or(0);
                ((doc_count + 1) as f64 / (df + 1) as f64).ln() + 1.0
            })
            .collect();

        let vocab = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        Self {
            config,
            vocab,
            terms,
            idf,
        }
    }

    fn vectorize(&self, counts: &HashMap<String, usize>) -> SparseVector {
        let entries = counts
            .iter()
            .filter_map(|(term, &count)| {
                self.vocab
                    .get(term)
                    .map(|&idx| (idx, count as f64 * self.idf[idx]))
            })
            .collect();
        SparseVector::new(entries).l2_normalized()
    }

    /// Project one more document into this space; unseen terms are ignored
    pub fn transform(&self, text: &str) -> SparseVector {
        self.vectorize(&count_terms(text, self.config.ngram_range))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in index order
    pub fn vocabulary(&self) -> &[String] {
        &self.terms
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocab.get(term).copied()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.index_of(term).map(|idx| self.idf[idx])
    }

    pub fn config(&self) -> &TfidfConfig {
        &self.config
    }
}

/// Fit one term space over the whole batch and return a row per document,
/// in input order.
pub fn fit_transform<S: AsRef<str>>(
    config: TfidfConfig,
    documents: &[S],
) -> Result<(TermSpace, Vec<SparseVector>), IndexError> {
    config.validate()?;
    if documents.is_empty() {
        return Err(IndexError::EmptyBatch);
    }

    let counts: Vec<HashMap<String, usize>> = documents
        .iter()
        .map(|doc| count_terms(doc.as_ref(), config.ngram_range))
        .collect();

    let space = TermSpace::from_counts(config, &counts);
    let rows = counts.iter().map(|c| space.vectorize(c)).collect();

    debug!(
        documents = documents.len(),
        terms = space.len(),
        "fitted term space"
    );

    Ok((space, rows))
}
