use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::LdaConfig;
use crate::counts::CountState;
use crate::error::{LdaError, Result};
use crate::sampler::GibbsSampler;
use crate::vocabulary::{Vocabulary, WordId};

/// Latent Dirichlet Allocation model trained with collapsed Gibbs sampling.
///
/// The corpus is encoded once at construction; the vocabulary, count tables
/// and topic assignments live for as long as the model.
#[derive(Debug)]
pub struct Lda<R = StdRng> {
    pub(crate) config: LdaConfig,
    pub(crate) labels: Vec<String>,

    pub(crate) vocab: Vocabulary,
    pub(crate) docs: Vec<Vec<WordId>>, // tokenized docs as word ids
    pub(crate) counts: CountState,

    sampler: GibbsSampler,
    iterations_run: usize,
    rng: R,
}

impl Lda<StdRng> {
    /// Build a model whose random source is seeded from `config.seed`, or
    /// from system entropy when no seed is set. Validation happens in
    /// [`Lda::with_rng`].
    pub fn new<D, S>(corpus: &[D], config: LdaConfig) -> Result<Self>
    where
        D: AsRef<[S]>,
        S: AsRef<str>,
    {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(corpus, config, rng)
    }
}

impl<R: Rng> Lda<R> {
    /// Build a model drawing all randomness from `rng`.
    pub fn with_rng<D, S>(corpus: &[D], config: LdaConfig, mut rng: R) -> Result<Self>
    where
        D: AsRef<[S]>,
        S: AsRef<str>,
    {
        config.validate()?;

        let vocab = Vocabulary::build(corpus);
        if vocab.is_empty() {
            log::warn!(
                "LDA corpus of {} documents has an empty vocabulary",
                corpus.len()
            );
        }
        let docs: Vec<Vec<WordId>> = corpus.iter().map(|d| vocab.encode(d.as_ref())).collect();

        let counts = CountState::initialize(
            &docs,
            config.num_topics,
            vocab.len(),
            config.alpha,
            config.beta,
            &mut rng,
        );
        log::debug!(
            "LDA initialized: {} documents, {} tokens, {} words, K={}",
            docs.len(),
            counts.total_tokens(),
            vocab.len(),
            config.num_topics
        );

        Ok(Self {
            labels: config.resolved_labels(),
            sampler: GibbsSampler::new(config.num_topics),
            config,
            vocab,
            docs,
            counts,
            iterations_run: 0,
            rng,
        })
    }

    /// Perform the configured number of Gibbs iterations.
    pub fn run(&mut self) -> Result<()> {
        let iters = self.config.iterations;
        let report_interval = std::cmp::max(10, iters / 20);
        log::info!(
            "Training LDA (K={}, iters={}, alpha={}, beta={})",
            self.config.num_topics,
            iters,
            self.config.alpha,
            self.config.beta
        );

        for it in 0..iters {
            self.sweep()?;

            if (it + 1) % report_interval == 0 || it + 1 == iters {
                if log::log_enabled!(log::Level::Debug) && self.counts.total_tokens() > 0 {
                    log::debug!(
                        "Training LDA: iteration {}/{} | log-lik {:.2} | perplexity {:.2}",
                        it + 1,
                        iters,
                        self.log_likelihood(),
                        self.perplexity()?
                    );
                } else {
                    log::debug!("Training LDA: iteration {}/{}", it + 1, iters);
                }
            }
        }

        log::info!("LDA training finished after {} iterations", self.iterations_run);
        Ok(())
    }

    /// Perform a single Gibbs iteration over every token.
    pub fn sweep(&mut self) -> Result<()> {
        self.sampler
            .sweep(&mut self.counts, &self.docs, &mut self.rng)?;
        self.iterations_run += 1;
        Ok(())
    }
}

impl<R> Lda<R> {
    pub fn config(&self) -> &LdaConfig {
        &self.config
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn counts(&self) -> &CountState {
        &self.counts
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn num_topics(&self) -> usize {
        self.config.num_topics
    }

    pub fn num_documents(&self) -> usize {
        self.docs.len()
    }

    /// Word ids of document `d` in token order.
    pub fn document(&self, d: usize) -> Result<&[WordId]> {
        self.check_document(d)?;
        Ok(&self.docs[d])
    }

    /// Total sweeps performed since construction.
    pub fn iterations_run(&self) -> usize {
        self.iterations_run
    }

    pub(crate) fn check_document(&self, d: usize) -> Result<()> {
        if d >= self.docs.len() {
            return Err(LdaError::DocumentOutOfRange {
                index: d,
                len: self.docs.len(),
            });
        }
        Ok(())
    }
}
