//! One screening run: candidates in, ranked table and notices out

use crate::candidate::{Candidate, Notice, NoticeReason};
use crate::config::Config;
use crate::error::ScreenError;
use resumatch_index::{fit_transform, rank};
use resumatch_report::RankedTable;
use resumatch_text::{LanguageModel, Normalizer};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Serialize)]
pub struct ScreeningOutcome {
    pub table: RankedTable,
    /// Candidates dropped before ranking, in upload order
    pub notices: Vec<Notice>,
}

/// A surviving candidate on its way to the vectorizer
struct Prepared<'a> {
    name: &'a str,
    tokens: String,
}

/// Ranks candidates against a query.
///
/// Holds no per-run state: the term space is refitted on every call and
/// the language model is shared read-only.
#[derive(Debug)]
pub struct Screener<M: LanguageModel> {
    config: Config,
    normalizer: Normalizer<M>,
}

impl<M: LanguageModel> Screener<M> {
    pub fn new(config: Config, model: Arc<M>) -> Self {
        Self {
            config,
            normalizer: Normalizer::new(model),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn normalizer(&self) -> &Normalizer<M> {
        &self.normalizer
    }

    pub fn screen(
        &self,
        query: &str,
        candidates: &[Candidate],
    ) -> Result<ScreeningOutcome, ScreenError> {
        if query.trim().is_empty() {
            return Err(ScreenError::NoQuery);
        }
        if candidates.is_empty() {
            return Err(ScreenError::NoCandidates);
        }

        let query_tokens = self.normalizer.normalize(query);
        if query_tokens.is_empty() {
            return Err(ScreenError::QueryHasNoTerms);
        }

        let mut survivors = Vec::with_capacity(candidates.len());
        let mut notices = Vec::new();
        for (position, candidate) in candidates.iter().enumerate() {
            match self.prepare(candidate) {
                Ok(tokens) => survivors.push(Prepared {
                    name: &candidate.name,
                    tokens,
                }),
                Err(reason) => {
                    let notice = Notice {
                        candidate: candidate.name.clone(),
                        position,
                        reason,
                    };
                    warn!("{notice}");
                    notices.push(notice);
                }
            }
        }

        if survivors.is_empty() {
            return Err(ScreenError::EmptyBatch {
                dropped: notices.len(),
            });
        }

        // query first, then survivors in upload order
        let mut documents = Vec::with_capacity(survivors.len() + 1);
        documents.push(query_tokens.as_str());
        documents.extend(survivors.iter().map(|s| s.tokens.as_str()));

        let (space, rows) = fit_transform(self.config.tfidf, &documents)?;
        let ranked = rank(&rows[0], &rows[1..]);

        let scores = ranked
            .into_iter()
            .map(|scored| (survivors[scored.index].name.to_string(), scored.score))
            .collect();
        let table = RankedTable::from_scores(scores, &self.config.thresholds);

        info!(
            candidates = candidates.len(),
            ranked = table.len(),
            dropped = notices.len(),
            terms = space.len(),
            "screening complete"
        );

        Ok(ScreeningOutcome { table, notices })
    }

    fn prepare(&self, candidate: &Candidate) -> Result<String, NoticeReason> {
        let document = resumatch_extract::extract(&candidate.content)?;
        debug!(
            candidate = %candidate.name,
            kind = ?document.kind,
            pages = document.pages,
            "extracted"
        );
        if document.is_blank() {
            return Err(NoticeReason::NoText);
        }

        let tokens = self.normalizer.normalize(&document.text);
        if tokens.is_empty() {
            return Err(NoticeReason::NoTerms);
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resumatch_report::Tier;
    use resumatch_text::EnglishModel;

    fn screener() -> Screener<EnglishModel> {
        Screener::new(Config::new(), Arc::new(EnglishModel::load(None).unwrap()))
    }

    const CORRUPT: &[u8] = &[0xFF, 0xD8, 0x00, 0x9F, 0x80, 0xC3, 0x28];

    #[test]
    fn test_python_developer_ranks_first() {
        let candidates = [
            Candidate::new("B", "Graphic designer with Adobe Photoshop experience"),
            Candidate::new("A", "Experienced Python developer skilled in REST API design"),
        ];
        let outcome = screener()
            .screen("python developer rest api", &candidates)
            .unwrap();
        let rows = outcome.table.rows();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "A");
        assert_eq!(rows[1].name, "B");
        assert!(rows[0].percentage > rows[1].percentage + 30.0);
        assert!(outcome.notices.is_empty());
    }

    #[test]
    fn test_missing_inputs() {
        let s = screener();
        assert!(matches!(
            s.screen("  ", &[Candidate::new("a", "rust")]),
            Err(ScreenError::NoQuery)
        ));
        let err = s.screen("rust developer", &[]).unwrap_err();
        assert!(matches!(err, ScreenError::NoCandidates));
        assert!(err.is_input_missing());
        assert!(matches!(
            s.screen("the and of", &[Candidate::new("a", "rust")]),
            Err(ScreenError::QueryHasNoTerms)
        ));
    }

    #[test]
    fn test_corrupt_candidate_dropped_with_notice() {
        let candidates = [
            Candidate::new("broken.pdf", CORRUPT),
            Candidate::new("good.txt", "Rust developer"),
        ];
        let outcome = screener().screen("rust developer", &candidates).unwrap();

        assert_eq!(outcome.table.len(), 1);
        assert_eq!(outcome.table.rows()[0].name, "good.txt");
        assert_eq!(outcome.notices.len(), 1);
        assert_eq!(outcome.notices[0].candidate, "broken.pdf");
        assert_eq!(outcome.notices[0].position, 0);
        assert!(matches!(outcome.notices[0].reason, NoticeReason::Extraction(_)));
    }

    #[test]
    fn test_only_corrupt_candidate_is_empty_batch() {
        let err = screener()
            .screen("rust developer", &[Candidate::new("broken.pdf", CORRUPT)])
            .unwrap_err();
        assert!(matches!(err, ScreenError::EmptyBatch { dropped: 1 }));
        assert!(!err.is_input_missing());
    }

    #[test]
    fn test_blank_and_stopword_only_candidates_excluded() {
        let candidates = [
            Candidate::new("blank.txt", " \n\t "),
            Candidate::new("filler.txt", "and the of 2024"),
            Candidate::new("real.txt", "Rust developer"),
        ];
        let outcome = screener().screen("rust developer", &candidates).unwrap();

        assert_eq!(outcome.table.len(), 1);
        let reasons: Vec<&NoticeReason> = outcome.notices.iter().map(|n| &n.reason).collect();
        assert_eq!(reasons, vec![&NoticeReason::NoText, &NoticeReason::NoTerms]);
    }

    #[test]
    fn test_identical_candidates_tie_in_upload_order() {
        let text = "Senior Rust engineer building async network services";
        let candidates = [
            Candidate::new("first.txt", text),
            Candidate::new("other.txt", "Pastry chef"),
            Candidate::new("second.txt", text),
        ];
        let outcome = screener()
            .screen("rust engineer network services", &candidates)
            .unwrap();
        let rows = outcome.table.rows();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].name, "first.txt");
        assert_eq!(rows[1].name, "second.txt");
        assert_eq!(rows[0].score, rows[1].score);
        assert_eq!(rows[2].name, "other.txt");
    }

    #[test]
    fn test_scores_in_unit_range_and_sorted() {
        let candidates = [
            Candidate::new("a", "python django rest api developer"),
            Candidate::new("b", "java spring developer"),
            Candidate::new("c", "python"),
            Candidate::new("d", "accountant"),
        ];
        let outcome = screener()
            .screen("python developer rest api django", &candidates)
            .unwrap();
        let rows = outcome.table.rows();

        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| (0.0..=1.0).contains(&r.score)));
        assert!(rows.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(rows.last().unwrap().tier, Tier::Low);
    }

    #[test]
    fn test_duplicate_names_both_ranked() {
        let candidates = [
            Candidate::new("resume.pdf", "rust"),
            Candidate::new("resume.pdf", "python"),
        ];
        let outcome = screener().screen("python", &candidates).unwrap();
        assert_eq!(outcome.table.len(), 2);
    }
}
