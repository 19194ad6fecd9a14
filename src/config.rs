use serde::{Deserialize, Serialize};

use crate::error::{LdaError, Result};

/// Hyper-parameters and run settings of an LDA model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LdaConfig {
    /// Number of topics (K)
    pub num_topics: usize,
    /// Dirichlet prior for document-topic distributions
    pub alpha: f64,
    /// Dirichlet prior for topic-word distributions
    pub beta: f64,
    /// Number of full Gibbs sweeps performed by `run`
    pub iterations: usize,
    /// Display names, one per topic. Positional names when absent.
    pub topic_labels: Option<Vec<String>>,
    /// Seed for the default random source
    pub seed: Option<u64>,
}

impl Default for LdaConfig {
    fn default() -> Self {
        Self {
            num_topics: 4,
            alpha: 0.1,
            beta: 0.01,
            iterations: 200,
            topic_labels: None,
            seed: None,
        }
    }
}

impl LdaConfig {
    pub fn new(num_topics: usize) -> Self {
        Self {
            num_topics,
            ..Default::default()
        }
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn topic_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topic_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration before anything is allocated.
    pub fn validate(&self) -> Result<()> {
        if self.num_topics == 0 {
            return Err(LdaError::InvalidTopicCount);
        }
        if !(self.alpha > 0.0 && self.alpha.is_finite()) {
            return Err(LdaError::InvalidParameter(format!(
                "alpha must be positive and finite, got {}",
                self.alpha
            )));
        }
        if !(self.beta > 0.0 && self.beta.is_finite()) {
            return Err(LdaError::InvalidParameter(format!(
                "beta must be positive and finite, got {}",
                self.beta
            )));
        }
        if let Some(labels) = &self.topic_labels {
            if labels.len() != self.num_topics {
                return Err(LdaError::LabelCountMismatch {
                    expected: self.num_topics,
                    actual: labels.len(),
                });
            }
        }
        Ok(())
    }

    /// Labels to display for each topic.
    pub fn resolved_labels(&self) -> Vec<String> {
        match &self.topic_labels {
            Some(labels) => labels.clone(),
            None => (0..self.num_topics).map(|k| format!("Topic {k}")).collect(),
        }
    }
}
