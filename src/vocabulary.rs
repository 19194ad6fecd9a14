use std::collections::HashMap;

pub type WordId = usize;

/// Bijection between distinct words and dense ids `0..len()`.
///
/// Ids are handed out in first-occurrence order while scanning documents
/// in order, tokens in order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<String>,
    word_to_id: HashMap<String, WordId>,
}

impl Vocabulary {
    pub fn build<D, S>(corpus: &[D]) -> Self
    where
        D: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut vocab = Self::default();
        for doc in corpus {
            for w in doc.as_ref() {
                let w = w.as_ref();
                if !vocab.word_to_id.contains_key(w) {
                    let id = vocab.words.len();
                    vocab.words.push(w.to_string());
                    vocab.word_to_id.insert(w.to_string(), id);
                }
            }
        }
        vocab
    }

    pub fn id(&self, word: &str) -> Option<WordId> {
        self.word_to_id.get(word).copied()
    }

    pub fn word(&self, id: WordId) -> Option<&str> {
        self.words.get(id).map(String::as_str)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Convert a document to word ids. Words unknown to the vocabulary are
    /// skipped.
    pub fn encode<S: AsRef<str>>(&self, doc: &[S]) -> Vec<WordId> {
        doc.iter().filter_map(|w| self.id(w.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_order() {
        let corpus = vec![vec!["a", "b", "a"], vec!["b", "b", "c"]];
        let vocab = Vocabulary::build(&corpus);

        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.id("a"), Some(0));
        assert_eq!(vocab.id("b"), Some(1));
        assert_eq!(vocab.id("c"), Some(2));
        assert_eq!(vocab.word(2), Some("c"));
        assert_eq!(vocab.word(3), None);
    }

    #[test]
    fn test_empty_documents_and_corpus() {
        let corpus: Vec<Vec<String>> = vec![vec![], vec!["x".to_string()], vec![]];
        let vocab = Vocabulary::build(&corpus);
        assert_eq!(vocab.words(), ["x".to_string()]);

        let empty: Vec<Vec<&str>> = Vec::new();
        assert!(Vocabulary::build(&empty).is_empty());
    }

    #[test]
    fn test_encode() {
        let corpus = vec![vec!["cricket", "match"], vec!["match", "team"]];
        let vocab = Vocabulary::build(&corpus);
        assert_eq!(vocab.encode(&["team", "cricket", "unknown"]), vec![2, 0]);
    }
}
