//! Read-only queries over the current sample.

use std::fmt;

use ndarray::Array2;
use serde::Serialize;

use crate::error::Result;
use crate::model::Lda;
use crate::vocabulary::WordId;

/// Topic representation with its label and top words.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicSummary {
    pub index: usize,
    pub label: String,
    /// Top words with their probabilities under the topic
    pub top_words: Vec<(String, f64)>,
    /// Share of corpus tokens assigned to the topic
    pub prevalence: f64,
}

impl fmt::Display for TopicSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (prevalence: {:.2}%) [",
            self.label,
            self.prevalence * 100.0
        )?;
        for (i, (word, prob)) in self.top_words.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {:.3}", word, prob)?;
        }
        write!(f, "]")
    }
}

impl<R> Lda<R> {
    /// Top `n` word ids of topic `k` by probability; equal probabilities
    /// keep ascending id order.
    pub(crate) fn ranked_words(&self, k: usize, n: usize) -> Vec<(WordId, f64)> {
        let total = self.counts.topic_total(k);
        let mut pairs: Vec<(WordId, f64)> = (0..self.vocab.len())
            .map(|w| (w, self.counts.topic_word(k, w) / total))
            .collect();
        pairs.sort_by(|a, b| b.1.total_cmp(&a.1));
        pairs.truncate(n);
        pairs
    }

    /// Top `top_n` words for each topic, most probable first.
    pub fn top_topic_words(&self, top_n: usize) -> Vec<Vec<String>> {
        (0..self.num_topics())
            .map(|k| {
                self.ranked_words(k, top_n)
                    .into_iter()
                    .map(|(w, _)| self.vocab.words()[w].clone())
                    .collect()
            })
            .collect()
    }

    /// Same as [`Lda::top_topic_words`], with each word's probability.
    pub fn top_topic_words_with_probabilities(&self, top_n: usize) -> Vec<Vec<(String, f64)>> {
        (0..self.num_topics())
            .map(|k| {
                self.ranked_words(k, top_n)
                    .into_iter()
                    .map(|(w, p)| (self.vocab.words()[w].clone(), p))
                    .collect()
            })
            .collect()
    }

    /// Labelled topic summaries with `top_n` words each.
    pub fn topics(&self, top_n: usize) -> Vec<TopicSummary> {
        let total_tokens = self.counts.total_tokens();
        self.top_topic_words_with_probabilities(top_n)
            .into_iter()
            .enumerate()
            .map(|(k, top_words)| TopicSummary {
                index: k,
                label: self.labels[k].clone(),
                top_words,
                prevalence: if total_tokens == 0 {
                    0.0
                } else {
                    self.counts.raw_topic_totals()[k] as f64 / total_tokens as f64
                },
            })
            .collect()
    }

    /// Normalized smoothed doc-topic row of document `d`.
    pub fn document_topic_distribution(&self, d: usize) -> Result<Vec<f64>> {
        self.check_document(d)?;
        let denom = self.counts.doc_total(d);
        Ok((0..self.num_topics())
            .map(|k| self.counts.doc_topic(d, k) / denom)
            .collect())
    }

    /// Most probable topic of document `d`; the lowest index wins ties.
    pub fn dominant_topic(&self, d: usize) -> Result<usize> {
        let dist = self.document_topic_distribution(d)?;
        let mut best = 0;
        for (k, &p) in dist.iter().enumerate().skip(1) {
            if p > dist[best] {
                best = k;
            }
        }
        Ok(best)
    }

    /// Label of the dominant topic of document `d`.
    pub fn document_label(&self, d: usize) -> Result<&str> {
        let k = self.dominant_topic(d)?;
        Ok(&self.labels[k])
    }

    /// θ[d][k] for every document.
    pub fn theta(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.num_documents(), self.num_topics()), |(d, k)| {
            self.counts.doc_topic(d, k) / self.counts.doc_total(d)
        })
    }

    /// φ[k][w] for every topic.
    pub fn phi(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.num_topics(), self.vocab.len()), |(k, w)| {
            self.counts.topic_word(k, w) / self.counts.topic_total(k)
        })
    }
}
