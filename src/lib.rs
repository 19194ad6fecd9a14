//! Latent Dirichlet Allocation topic inference with collapsed Gibbs sampling.
//!
//! Callers hand in documents that are already tokenized (and stripped of
//! stop-words); the model assigns every token a topic, resamples the
//! assignments for a fixed number of iterations and answers queries about
//! the resulting topics.
//!
//! ```
//! use gibbslda::{Lda, LdaConfig};
//!
//! let docs = vec![vec!["a", "b", "a"], vec!["b", "b", "c"]];
//! let mut lda = Lda::new(&docs, LdaConfig::new(2).iterations(50).seed(42)).unwrap();
//! lda.run().unwrap();
//!
//! let words = lda.top_topic_words(1);
//! assert_eq!(words.len(), 2);
//! let dist = lda.document_topic_distribution(0).unwrap();
//! assert!((dist.iter().sum::<f64>() - 1.0).abs() < 1e-9);
//! ```

extern crate log;

pub mod config;
pub mod counts;
pub mod error;
mod metrics;
pub mod model;
mod sampler;
pub mod summary;
pub mod vocabulary;

pub use config::LdaConfig;
pub use counts::CountState;
pub use error::{LdaError, Result};
pub use model::Lda;
pub use summary::TopicSummary;
pub use vocabulary::{Vocabulary, WordId};

/// Three topics, alpha 0.1, beta 0.01, seed 42.
pub fn default<D, S>(corpus: &[D]) -> Result<Lda>
where
    D: AsRef<[S]>,
    S: AsRef<str>,
{
    Lda::new(corpus, LdaConfig::new(3).seed(42))
}
