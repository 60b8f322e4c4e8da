use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::iter::Peekable;
use std::str::CharIndices;

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"[^a-z0-9']+").unwrap();
}

/// Abbreviations that end in a period without ending the sentence.
const ABBREVIATIONS: [&str; 34] = [
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ft", "gen", "gov", "sen", "rep",
    "rev", "capt", "col", "lt", "sgt", "vs", "etc", "approx", "dept", "inc", "ltd", "corp", "jan",
    "feb", "aug", "sept", "oct", "nov", "dec", "cf",
];

/// Abbreviations that are also plain words; they only hold a sentence open
/// when a number follows, as in "No. 5" or "Fig. 3".
const NUMBERED: [&str; 5] = ["no", "nos", "fig", "vol", "pp"];

/// Lower-cases `corpus` and collapses every run of characters other than ASCII
/// letters, digits and apostrophes into a single space.
pub fn normalize(corpus: &str) -> String {
    NON_WORD
        .replace_all(&corpus.to_lowercase(), " ")
        .into_owned()
}

pub fn words(corpus: &str) -> Vec<String> {
    normalize(corpus)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

pub fn sentences(corpus: &str) -> Vec<String> {
    SentenceSplitter::default()
        .split(corpus)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Punctuation and capitalization driven sentence segmentation.
///
/// Works on raw text, so terminators and casing must still be present.
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    abbreviations: HashSet<String>,
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        SentenceSplitter::with_abbreviations(ABBREVIATIONS)
    }
}

impl SentenceSplitter {
    pub fn with_abbreviations<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        SentenceSplitter {
            abbreviations: abbreviations
                .into_iter()
                .map(|a| a.as_ref().trim_end_matches('.').to_lowercase())
                .collect(),
        }
    }

    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((idx, c)) = chars.next() {
            if !is_terminator(c) {
                continue;
            }
            let (end, lone_period) = consume_terminators(&mut chars, idx, c);

            // "3.14", "e.g.x" and friends: no break without trailing whitespace
            match chars.peek() {
                Some(&(_, next)) if !next.is_whitespace() => continue,
                None => break,
                _ => {}
            }
            let opens_sentence = text[end..]
                .trim_start()
                .chars()
                .next()
                .map_or(true, |n| n.is_uppercase() || n.is_numeric() || is_opener(n));
            if !opens_sentence {
                continue;
            }
            if lone_period && self.is_abbreviation(&text[start..idx], &text[end..]) {
                continue;
            }

            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
        push_trimmed(&mut sentences, &text[start..]);
        sentences
    }

    fn is_abbreviation(&self, preceding: &str, following: &str) -> bool {
        let word = preceding
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(is_opener);
        let before = preceding[..preceding.len() - word.len()]
            .split_whitespace()
            .next_back()
            .unwrap_or("")
            .trim_start_matches(is_opener);
        let after = following
            .split_whitespace()
            .next()
            .unwrap_or("")
            .trim_start_matches(is_opener);

        let lower = word.to_lowercase();
        let mut letters = word.chars();
        match (letters.next(), letters.next()) {
            (None, _) => false,
            // "J. R. R. Tolkien", "John F. Kennedy"; not "I." or "got an A."
            (Some(first), None) => {
                first.is_uppercase() && word != "I" && (is_initial(after) || starts_upper(before))
            }
            _ => {
                lower.contains('.')
                    || self.abbreviations.contains(&lower)
                    || (NUMBERED.contains(&lower.as_str())
                        && after.starts_with(|c: char| c.is_ascii_digit()))
            }
        }
    }
}

fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(letter), Some('.'), None) if letter.is_uppercase()
    )
}

fn starts_upper(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Swallows a run of terminators and closing punctuation starting at `c`.
/// Returns the byte offset just past the run and whether the run held a
/// single period.
fn consume_terminators(chars: &mut Peekable<CharIndices<'_>>, idx: usize, c: char) -> (usize, bool) {
    let mut end = idx + c.len_utf8();
    let mut lone_period = c == '.';
    while let Some(&(i, next)) = chars.peek() {
        if is_terminator(next) {
            lone_period = false;
        } else if !is_closer(next) {
            break;
        }
        end = i + next.len_utf8();
        chars.next();
    }
    (end, lone_period)
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let sentence = candidate.trim();
    if !sentence.is_empty() {
        sentences.push(sentence);
    }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{2019}' | '\u{201d}')
}

fn is_opener(c: char) -> bool {
    matches!(c, '"' | '\'' | '(' | '[' | '\u{2018}' | '\u{201c}')
}
