//! Cosine similarity ranking against the query row

use crate::sparse::SparseVector;
use serde::Serialize;

/// Candidate position in upload order and its similarity to the query
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scored {
    pub index: usize,
    pub score: f64,
}

/// Cosine of the angle between two vectors, clamped into [0, 1].
/// A zero vector on either side scores 0.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let (norm_a, norm_b) = (a.norm(), b.norm());
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (a.dot(b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Score every candidate and sort descending.
///
/// The sort is stable, so candidates with exactly equal scores keep
/// their upload order.
pub fn rank(query: &SparseVector, candidates: &[SparseVector]) -> Vec<Scored> {
    let mut scored: Vec<Scored> = candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| Scored {
            index,
            score: cosine_similarity(query, candidate),
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}
