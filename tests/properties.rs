use gibbslda::{Lda, LdaConfig};
use proptest::prelude::*;

fn corpus_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d", "e"]), 0..8),
        0..6,
    )
    .prop_map(|docs| {
        docs.into_iter()
            .map(|doc| doc.into_iter().map(String::from).collect())
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_counts_conserved_after_sweeps(
        corpus in corpus_strategy(),
        k in 1usize..5,
        alpha in 0.01f64..2.0,
        beta in 0.001f64..1.0,
        sweeps in 0usize..6,
        seed in any::<u64>(),
    ) {
        let config = LdaConfig::new(k).alpha(alpha).beta(beta).seed(seed);
        let mut lda = Lda::new(&corpus, config).unwrap();
        for _ in 0..sweeps {
            lda.sweep().unwrap();
        }

        let counts = lda.counts();
        for (d, doc) in corpus.iter().enumerate() {
            let sum: f64 = (0..k).map(|t| counts.doc_topic(d, t)).sum();
            prop_assert!((sum - (doc.len() as f64 + k as f64 * alpha)).abs() < 1e-9);
        }
        for t in 0..k {
            let sum: f64 = (0..counts.vocab_size()).map(|w| counts.topic_word(t, w)).sum();
            prop_assert!((sum - counts.topic_total(t)).abs() < 1e-9);
        }

        // Every assignment accounts for exactly one unit of count.
        let mut ndk = vec![vec![0usize; k]; corpus.len()];
        let mut nkw = vec![vec![0usize; counts.vocab_size()]; k];
        for (d, topics) in counts.assignments().iter().enumerate() {
            prop_assert_eq!(topics.len(), corpus[d].len());
            let words = lda.document(d).unwrap();
            for (pos, &t) in topics.iter().enumerate() {
                prop_assert!(t < k);
                ndk[d][t] += 1;
                nkw[t][words[pos]] += 1;
            }
        }
        for d in 0..corpus.len() {
            for t in 0..k {
                prop_assert_eq!(ndk[d][t], counts.raw_doc_topic()[[d, t]]);
            }
        }
        for t in 0..k {
            for w in 0..counts.vocab_size() {
                prop_assert_eq!(nkw[t][w], counts.raw_topic_word()[[t, w]]);
            }
        }
    }

    #[test]
    fn prop_distributions_are_valid(
        corpus in corpus_strategy(),
        k in 1usize..5,
        seed in any::<u64>(),
    ) {
        let mut lda = Lda::new(&corpus, LdaConfig::new(k).iterations(3).seed(seed)).unwrap();
        lda.run().unwrap();
        for d in 0..corpus.len() {
            let dist = lda.document_topic_distribution(d).unwrap();
            prop_assert_eq!(dist.len(), k);
            prop_assert!(dist.iter().all(|&p| p >= 0.0));
            prop_assert!((dist.iter().sum::<f64>() - 1.0).abs() < 1e-9);
            let label = lda.document_label(d).unwrap();
            prop_assert!(lda.labels().iter().any(|l| l == label));
        }
    }

    #[test]
    fn prop_top_words_respect_ordering(
        corpus in corpus_strategy(),
        k in 1usize..4,
        top_n in 0usize..7,
        seed in any::<u64>(),
    ) {
        let mut lda = Lda::new(&corpus, LdaConfig::new(k).iterations(2).seed(seed)).unwrap();
        lda.run().unwrap();
        let phi = lda.phi();
        let vocab = lda.vocabulary();
        for (t, words) in lda.top_topic_words(top_n).iter().enumerate() {
            prop_assert_eq!(words.len(), top_n.min(vocab.len()));
            let ids: Vec<usize> = words.iter().map(|w| vocab.id(w).unwrap()).collect();
            for pair in ids.windows(2) {
                let (p0, p1) = (phi[[t, pair[0]]], phi[[t, pair[1]]]);
                prop_assert!(p0 > p1 || (p0 == p1 && pair[0] < pair[1]));
            }
        }
    }
}
