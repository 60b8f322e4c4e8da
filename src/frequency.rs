use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Occurrence counts per distinct token.
///
/// Absent tokens read as zero. Iteration yields tokens in the order they were
/// first seen, which is the order ranking falls back to for equal counts.
#[derive(Debug, Clone, Default)]
pub struct FrequencyMap {
    positions: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        FrequencyMap::default()
    }

    pub fn add(&mut self, token: &str) {
        self.add_count(token, 1);
    }

    fn add_count(&mut self, token: &str, count: usize) {
        match self.positions.get(token) {
            Some(&position) => self.entries[position].1 += count,
            None => {
                self.positions.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), count));
            }
        }
    }

    pub fn get(&self, token: &str) -> usize {
        self.positions
            .get(token)
            .map_or(0, |&position| self.entries[position].1)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted sequence.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
    }

    pub fn merge(&mut self, other: &FrequencyMap) {
        for (token, count) in other.iter() {
            self.add_count(token, count);
        }
    }
}

impl PartialEq for FrequencyMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(token, count)| other.get(token) == count)
    }
}

impl Eq for FrequencyMap {}

impl<S: AsRef<str>> FromIterator<S> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut map = FrequencyMap::new();
        map.extend(iter);
        map
    }
}

impl<S: AsRef<str>> Extend<S> for FrequencyMap {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for token in iter {
            self.add(token.as_ref());
        }
    }
}

impl Serialize for FrequencyMap {
    fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (token, count) in self.iter() {
            map.serialize_entry(token, &count)?;
        }
        map.end()
    }
}

pub fn count<S: AsRef<str>>(tokens: &[S]) -> FrequencyMap {
    tokens.iter().collect()
}
