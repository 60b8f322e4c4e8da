use crate::error::{Error, Result};
use crate::frequency::FrequencyMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedWord {
    pub word: String,
    pub count: usize,
}

impl RankedWord {
    pub fn new(word: &str, count: usize) -> Self {
        RankedWord {
            word: word.to_string(),
            count,
        }
    }
}

/// The `k` most frequent words, highest count first.
///
/// Equal counts keep the order in which the words were first counted. Asking
/// for more words than `frequencies` holds is an error rather than a short list.
pub fn top_k(frequencies: &FrequencyMap, k: usize) -> Result<Vec<RankedWord>> {
    if k > frequencies.len() {
        return Err(Error::InvalidArgument(format!(
            "too many words requested: k = {} but only {} distinct words",
            k,
            frequencies.len()
        )));
    }
    let mut ranked: Vec<(&str, usize)> = frequencies.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(ranked
        .into_iter()
        .take(k)
        .map(|(word, count)| RankedWord::new(word, count))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::count;

    fn abc() -> FrequencyMap {
        count(&["a", "b", "a", "c", "b", "a"])
    }

    #[test]
    fn test_top_k_example() {
        assert_eq!(
            top_k(&abc(), 2).unwrap(),
            vec![RankedWord::new("a", 3), RankedWord::new("b", 2)]
        );
    }

    #[test]
    fn test_k_larger_than_distinct_words() {
        let frequencies = count(&["a", "a", "a", "b", "b"]);
        let err = top_k(&frequencies, 5).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_k_equal_to_distinct_words() {
        let ranked = top_k(&abc(), 3).unwrap();
        assert_eq!(ranked.len(), 3);
        assert!(ranked.windows(2).all(|pair| pair[0].count >= pair[1].count));
    }

    #[test]
    fn test_zero_k() {
        assert!(top_k(&abc(), 0).unwrap().is_empty());
        assert!(top_k(&FrequencyMap::new(), 0).unwrap().is_empty());
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let frequencies = count(&["pear", "fig", "apple", "fig", "pear", "kiwi", "apple"]);
        let words: Vec<_> = top_k(&frequencies, 4)
            .unwrap()
            .into_iter()
            .map(|ranked| ranked.word)
            .collect();
        assert_eq!(words, vec!["pear", "fig", "apple", "kiwi"]);
    }

    #[test]
    fn test_does_not_mutate_frequencies() {
        let frequencies = abc();
        let before = frequencies.clone();
        top_k(&frequencies, 2).unwrap();
        assert_eq!(frequencies, before);
        assert_eq!(frequencies.iter().collect::<Vec<_>>(), before.iter().collect::<Vec<_>>());
    }
}
