//! Stop-word sets and filtering.
//!
//! Tokens are compared by exact string equality, so a set is expected to hold
//! words in the same normalized form the lexer produces.

use crate::error::Result;
use crate::lexer::words;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// The NLTK English stop-word list.
const ENGLISH: [&str; 179] = [
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopWords {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn english() -> Self {
        StopWords::new(ENGLISH)
    }

    pub fn empty() -> Self {
        StopWords::default()
    }

    /// Loads one stop word per line. Blank lines and `#` comments are skipped,
    /// and every entry is normalized so it can match lexer output.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(StopWords::new(
            contents
                .lines()
                .map(|line| line.split('#').next().unwrap_or(""))
                .flat_map(words),
        ))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Keeps the tokens that are not stop words, in their original order.
pub fn filter_stop_words<S: AsRef<str>>(tokens: &[S], stopwords: &StopWords) -> Vec<String> {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .filter(|token| !stopwords.contains(token))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_filter_example() {
        let stopwords = StopWords::new(["i"]);
        assert_eq!(
            filter_stop_words(&["i", "like", "math"], &stopwords),
            vec!["like", "math"]
        );
    }

    #[test]
    fn test_filter_preserves_order_and_duplicates() {
        let tokens = ["the", "cat", "and", "the", "cat", "sat"];
        let filtered = filter_stop_words(&tokens, &StopWords::english());
        assert_eq!(filtered, vec!["cat", "cat", "sat"]);
        assert!(filtered.len() <= tokens.len());
        assert!(filtered.iter().all(|w| tokens.contains(&w.as_str())));
    }

    #[test]
    fn test_membership_is_exact() {
        let stopwords = StopWords::english();
        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("don't"));
        assert!(!stopwords.contains("The"));
        assert_eq!(
            filter_stop_words(&["The", "the"], &stopwords),
            vec!["The"]
        );
    }

    #[test]
    fn test_english_list_size() {
        assert_eq!(StopWords::english().len(), 179);
        assert!(StopWords::empty().is_empty());
    }

    #[test]
    fn test_empty_set_keeps_everything() {
        let tokens = vec!["a".to_string(), "b".to_string()];
        assert_eq!(filter_stop_words(&tokens, &StopWords::empty()), tokens);
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("wordscrape-stopwords-{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "# custom list").unwrap();
            writeln!(file, "Foo").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "bar  # trailing comment").unwrap();
            writeln!(file, "Isn't").unwrap();
        }
        let stopwords = StopWords::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(stopwords.len(), 3);
        assert!(stopwords.contains("foo"));
        assert!(stopwords.contains("bar"));
        assert!(stopwords.contains("isn't"));
    }

    #[test]
    fn test_from_missing_file() {
        let result = StopWords::from_file("/definitely/not/here.txt");
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }
}
