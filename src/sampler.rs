//! Collapsed Gibbs sampling over a [`CountState`].

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::counts::CountState;
use crate::error::{LdaError, Result};
use crate::vocabulary::WordId;

/// Resamples token topics in place. Holds a scratch buffer for the
/// conditional weights so a sweep does not allocate per token.
#[derive(Debug, Clone)]
pub(crate) struct GibbsSampler {
    weights: Vec<f64>,
}

impl GibbsSampler {
    pub(crate) fn new(num_topics: usize) -> Self {
        Self {
            weights: vec![0.0; num_topics],
        }
    }

    /// One full pass: documents in order, tokens in order. Each step sees
    /// the counts left by the previous one.
    pub(crate) fn sweep<R: Rng + ?Sized>(
        &mut self,
        state: &mut CountState,
        docs: &[Vec<WordId>],
        rng: &mut R,
    ) -> Result<()> {
        for (d, doc) in docs.iter().enumerate() {
            for (pos, &w) in doc.iter().enumerate() {
                self.resample(state, d, pos, w, rng)?;
            }
        }
        Ok(())
    }

    /// Remove the token, draw its topic from the conditional
    /// p(k) ∝ (n_kw + beta) / (n_k + V*beta) * (n_dk + alpha), add it back.
    ///
    /// On a degenerate distribution the token is restored to its old topic
    /// before the error is returned.
    pub(crate) fn resample<R: Rng + ?Sized>(
        &mut self,
        state: &mut CountState,
        d: usize,
        pos: usize,
        w: WordId,
        rng: &mut R,
    ) -> Result<usize> {
        let old_t = state.assignments()[d][pos];
        state.remove(d, w, old_t);

        for (k, weight) in self.weights.iter_mut().enumerate() {
            *weight = state.topic_word(k, w) / state.topic_total(k) * state.doc_topic(d, k);
        }

        let total: f64 = self.weights.iter().sum();
        let dist = if total > 0.0 && total.is_finite() {
            WeightedIndex::new(&self.weights).ok()
        } else {
            None
        };
        let Some(dist) = dist else {
            state.add(d, w, old_t);
            return Err(LdaError::DegenerateDistribution {
                document: d,
                position: pos,
            });
        };

        let new_t = dist.sample(rng);
        state.add(d, w, new_t);
        state.assign(d, pos, new_t);
        Ok(new_t)
    }
}
