use resumatch_index::IndexError;
use resumatch_text::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("no query provided: enter a job description")]
    NoQuery,

    #[error("no candidates provided: upload at least one resume")]
    NoCandidates,

    #[error("the job description has no usable terms after normalization")]
    QueryHasNoTerms,

    #[error("no candidates survived extraction ({dropped} dropped): nothing to rank")]
    EmptyBatch { dropped: usize },

    #[error("language model unavailable: {0}")]
    ModelUnavailable(#[from] ModelError),

    #[error(transparent)]
    Index(#[from] IndexError),
}

impl ScreenError {
    /// Query or candidates missing from the request itself
    pub fn is_input_missing(&self) -> bool {
        matches!(
            self,
            ScreenError::NoQuery | ScreenError::NoCandidates | ScreenError::QueryHasNoTerms
        )
    }
}
