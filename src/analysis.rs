use crate::error::Result;
use crate::frequency::{count, FrequencyMap};
use crate::lexer::words;
use crate::rank::{top_k, RankedWord};
use crate::stopwords::{filter_stop_words, StopWords};
use serde::Serialize;
use tracing::debug;

/// How many words `analyze` ranks when the caller does not ask for a number.
pub const DEFAULT_TOP_K: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub total_words: usize,
    /// Distinct words left after stop-word filtering.
    pub distinct_content_words: usize,
    pub content_words: usize,
    pub top: Vec<RankedWord>,
}

/// Runs the normalize, tokenize, filter, count and rank stages over a corpus.
#[derive(Debug, Clone)]
pub struct Analyzer {
    stopwords: StopWords,
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::new(StopWords::english())
    }
}

impl Analyzer {
    pub fn new(stopwords: StopWords) -> Self {
        Analyzer { stopwords }
    }

    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    pub fn words(&self, corpus: &str) -> Vec<String> {
        words(corpus)
    }

    /// Words of `corpus` that are not stop words.
    pub fn content_words(&self, corpus: &str) -> Vec<String> {
        filter_stop_words(&words(corpus), &self.stopwords)
    }

    pub fn word_count(&self, corpus: &str) -> usize {
        words(corpus).len()
    }

    pub fn frequencies(&self, corpus: &str) -> FrequencyMap {
        count(&words(corpus))
    }

    pub fn content_frequencies(&self, corpus: &str) -> FrequencyMap {
        count(&self.content_words(corpus))
    }

    pub fn top_k_words(&self, corpus: &str, k: usize) -> Result<Vec<RankedWord>> {
        top_k(&self.content_frequencies(corpus), k)
    }

    /// Without `k`, ranks up to `DEFAULT_TOP_K` words. An explicit `k` must
    /// not exceed the number of distinct non-stop words.
    pub fn analyze(&self, corpus: &str, k: Option<usize>) -> Result<Analysis> {
        let all = words(corpus);
        let content = filter_stop_words(&all, &self.stopwords);
        let frequencies = count(&content);
        debug!(
            "{} words, {} after stop-word filtering, {} distinct",
            all.len(),
            content.len(),
            frequencies.len()
        );

        let k = k.unwrap_or_else(|| DEFAULT_TOP_K.min(frequencies.len()));
        Ok(Analysis {
            total_words: all.len(),
            distinct_content_words: frequencies.len(),
            content_words: content.len(),
            top: top_k(&frequencies, k)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const MATH: &str = "I like to teach math. Math is a beautiful field. \
                        I am a person who likes to do math and play football on the field.";

    #[test]
    fn test_content_words() {
        assert_eq!(
            Analyzer::default().content_words("I like to teach math. Math is a beautiful field."),
            vec!["like", "teach", "math", "math", "beautiful", "field"]
        );
    }

    #[test]
    fn test_word_count() {
        assert_eq!(Analyzer::default().word_count(MATH), 25);
        assert_eq!(Analyzer::default().word_count(""), 0);
    }

    #[test]
    fn test_frequencies_include_stop_words() {
        let frequencies = Analyzer::default().frequencies(MATH);
        assert_eq!(frequencies.get("i"), 2);
        assert_eq!(frequencies.get("math"), 3);
        assert_eq!(frequencies.total(), 25);
    }

    #[test]
    fn test_top_k_words() {
        let top = Analyzer::default().top_k_words(MATH, 3).unwrap();
        assert_eq!(
            top,
            vec![
                RankedWord::new("math", 3),
                RankedWord::new("field", 2),
                RankedWord::new("like", 1),
            ]
        );
    }

    #[test]
    fn test_top_k_words_too_many() {
        let err = Analyzer::default().top_k_words("math math field", 3).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_analyze_default_k_is_capped() {
        let analysis = Analyzer::default().analyze("cake cake bread", None).unwrap();
        assert_eq!(analysis.total_words, 3);
        assert_eq!(analysis.distinct_content_words, 2);
        assert_eq!(analysis.top.len(), 2);
    }

    #[test]
    fn test_analyze_empty_corpus_is_not_an_error() {
        let analysis = Analyzer::default().analyze("", None).unwrap();
        assert_eq!(analysis.total_words, 0);
        assert!(analysis.top.is_empty());
    }

    #[test]
    fn test_analyze_with_custom_stopwords() {
        let analyzer = Analyzer::new(StopWords::new(["math"]));
        let analysis = analyzer.analyze(MATH, Some(1)).unwrap();
        assert_eq!(analysis.content_words, 22);
        assert_eq!(analysis.top, vec![RankedWord::new("i", 2)]);
    }
}
