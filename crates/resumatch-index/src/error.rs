use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IndexError {
    #[error("cannot fit a term space over an empty batch")]
    EmptyBatch,

    #[error("invalid vectorizer config: {0}")]
    InvalidConfig(String),
}
