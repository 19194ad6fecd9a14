use thiserror::Error;

/// Errors raised while building or querying an LDA model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LdaError {
    #[error("number of topics must be positive")]
    InvalidTopicCount,

    #[error("invalid hyperparameter: {0}")]
    InvalidParameter(String),

    #[error("expected {expected} topic labels, got {actual}")]
    LabelCountMismatch { expected: usize, actual: usize },

    #[error("document index {index} out of range for corpus of {len} documents")]
    DocumentOutOfRange { index: usize, len: usize },

    #[error("topic index {index} out of range for {len} topics")]
    TopicOutOfRange { index: usize, len: usize },

    /// The conditional distribution of a token summed to zero (or was not
    /// finite). Only reachable when the priors bypass validation.
    #[error("degenerate topic distribution at document {document}, position {position}")]
    DegenerateDistribution { document: usize, position: usize },

    #[error("corpus contains no tokens")]
    EmptyCorpus,
}

pub type Result<T> = std::result::Result<T, LdaError>;
