//! Fit diagnostics: corpus likelihood, perplexity and topic coherence.

use crate::error::{LdaError, Result};
use crate::model::Lda;

impl<R> Lda<R> {
    /// p(w | d) = Σ_k θ[d][k] · φ[k][w]
    fn word_probability(&self, d: usize, w: usize) -> f64 {
        let doc_total = self.counts.doc_total(d);
        (0..self.num_topics())
            .map(|k| {
                let theta = self.counts.doc_topic(d, k) / doc_total;
                let phi = self.counts.topic_word(k, w) / self.counts.topic_total(k);
                theta * phi
            })
            .sum()
    }

    /// Log-likelihood of every corpus token under the current θ and φ.
    pub fn log_likelihood(&self) -> f64 {
        let mut ll = 0.0;
        for (d, doc) in self.docs.iter().enumerate() {
            for &w in doc {
                let p = self.word_probability(d, w);
                if p > 0.0 {
                    ll += p.ln();
                }
            }
        }
        ll
    }

    /// `exp(-log_likelihood / tokens)`. Lower is a better fit.
    pub fn perplexity(&self) -> Result<f64> {
        let tokens = self.counts.total_tokens();
        if tokens == 0 {
            return Err(LdaError::EmptyCorpus);
        }
        Ok((-self.log_likelihood() / tokens as f64).exp())
    }

    /// Mean pairwise PMI of the topic's `top_n` words, counted over
    /// document co-occurrence. Pairs that never co-occur are skipped.
    pub fn topic_coherence(&self, topic: usize, top_n: usize) -> Result<f64> {
        if topic >= self.num_topics() {
            return Err(LdaError::TopicOutOfRange {
                index: topic,
                len: self.num_topics(),
            });
        }
        Ok(self.coherence(topic, top_n))
    }

    /// Coherence of every topic, indexed by topic.
    pub fn coherence_scores(&self, top_n: usize) -> Vec<f64> {
        (0..self.num_topics())
            .map(|k| self.coherence(k, top_n))
            .collect()
    }

    fn coherence(&self, topic: usize, top_n: usize) -> f64 {
        let top: Vec<usize> = self
            .ranked_words(topic, top_n)
            .into_iter()
            .map(|(w, _)| w)
            .collect();
        if top.len() < 2 {
            return 0.0;
        }

        // presence[i][d]: does document d contain top word i
        let presence: Vec<Vec<bool>> = top
            .iter()
            .map(|&w| self.docs.iter().map(|doc| doc.contains(&w)).collect())
            .collect();
        let doc_freq: Vec<usize> = presence
            .iter()
            .map(|row| row.iter().filter(|&&p| p).count())
            .collect();
        let n_docs = self.docs.len() as f64;

        let mut pmi_sum = 0.0;
        let mut pairs = 0usize;
        for i in 0..top.len() {
            for j in (i + 1)..top.len() {
                let co = presence[i]
                    .iter()
                    .zip(&presence[j])
                    .filter(|&(&a, &b)| a && b)
                    .count();
                if co > 0 {
                    let occ = (doc_freq[i] * doc_freq[j]) as f64;
                    pmi_sum += ((co as f64 + 1.0) * n_docs / (occ + 1.0)).ln();
                    pairs += 1;
                }
            }
        }

        if pairs > 0 {
            pmi_sum / pairs as f64
        } else {
            0.0
        }
    }
}
