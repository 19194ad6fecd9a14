use ndarray::{Array1, Array2};
use rand::Rng;

use crate::vocabulary::WordId;

/// Sufficient statistics of the current sample.
///
/// Counts are kept as exact integers; the priors are added on read, so
/// `doc_topic(d, k) = n_dk + alpha`, `topic_word(k, w) = n_kw + beta` and
/// `topic_total(k) = n_k + V * beta`.
#[derive(Debug, Clone)]
pub struct CountState {
    alpha: f64,
    beta: f64,
    vocab_size: usize,

    ndk: Array2<usize>, // [doc][topic]
    nkw: Array2<usize>, // [topic][word]
    nk: Array1<usize>,  // [topic]
    doc_lengths: Vec<usize>,

    z: Vec<Vec<usize>>, // topic assignment for each word position
}

impl CountState {
    /// Allocate the tables and draw a uniform initial topic for every token.
    pub(crate) fn initialize<R: Rng + ?Sized>(
        docs: &[Vec<WordId>],
        num_topics: usize,
        vocab_size: usize,
        alpha: f64,
        beta: f64,
        rng: &mut R,
    ) -> Self {
        let mut state = Self {
            alpha,
            beta,
            vocab_size,
            ndk: Array2::zeros((docs.len(), num_topics)),
            nkw: Array2::zeros((num_topics, vocab_size)),
            nk: Array1::zeros(num_topics),
            doc_lengths: docs.iter().map(Vec::len).collect(),
            z: Vec::with_capacity(docs.len()),
        };

        for (d, doc) in docs.iter().enumerate() {
            let mut topics = Vec::with_capacity(doc.len());
            for &w in doc {
                let topic = rng.gen_range(0..num_topics);
                state.add(d, w, topic);
                topics.push(topic);
            }
            state.z.push(topics);
        }
        state
    }

    pub(crate) fn remove(&mut self, d: usize, w: WordId, topic: usize) {
        self.ndk[[d, topic]] -= 1;
        self.nkw[[topic, w]] -= 1;
        self.nk[topic] -= 1;
    }

    pub(crate) fn add(&mut self, d: usize, w: WordId, topic: usize) {
        self.ndk[[d, topic]] += 1;
        self.nkw[[topic, w]] += 1;
        self.nk[topic] += 1;
    }

    pub(crate) fn assign(&mut self, d: usize, pos: usize, topic: usize) {
        self.z[d][pos] = topic;
    }

    pub fn num_topics(&self) -> usize {
        self.nk.len()
    }

    pub fn num_documents(&self) -> usize {
        self.doc_lengths.len()
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn doc_length(&self, d: usize) -> usize {
        self.doc_lengths[d]
    }

    pub fn total_tokens(&self) -> usize {
        self.doc_lengths.iter().sum()
    }

    /// Smoothed doc-topic count.
    pub fn doc_topic(&self, d: usize, k: usize) -> f64 {
        self.ndk[[d, k]] as f64 + self.alpha
    }

    /// Smoothed topic-word count.
    pub fn topic_word(&self, k: usize, w: WordId) -> f64 {
        self.nkw[[k, w]] as f64 + self.beta
    }

    /// Smoothed topic total; equals the sum of the topic's topic-word row.
    pub fn topic_total(&self, k: usize) -> f64 {
        self.nk[k] as f64 + self.vocab_size as f64 * self.beta
    }

    /// Sum of the smoothed doc-topic row: `tokens(d) + K * alpha`.
    pub fn doc_total(&self, d: usize) -> f64 {
        self.doc_lengths[d] as f64 + self.num_topics() as f64 * self.alpha
    }

    /// Unsmoothed `[doc][topic]` counts.
    pub fn raw_doc_topic(&self) -> &Array2<usize> {
        &self.ndk
    }

    /// Unsmoothed `[topic][word]` counts.
    pub fn raw_topic_word(&self) -> &Array2<usize> {
        &self.nkw
    }

    /// Unsmoothed tokens per topic.
    pub fn raw_topic_totals(&self) -> &Array1<usize> {
        &self.nk
    }

    /// Topic assignment table, one entry per token.
    pub fn assignments(&self) -> &[Vec<usize>] {
        &self.z
    }
}
