pub mod analysis;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod frequency;
pub mod lexer;
pub mod lookup;
pub mod plot;
pub mod rank;
pub mod stopwords;

pub use analysis::{Analysis, Analyzer};
pub use config::Config;
pub use document::{Document, Source};
pub use error::{Error, Result};
pub use extract::Extractor;
pub use fetch::Fetcher;
pub use frequency::{count, FrequencyMap};
pub use lexer::{normalize, sentences, words};
pub use lookup::Dictionary;
pub use rank::{top_k, RankedWord};
pub use stopwords::{filter_stop_words, StopWords};

/// Stop words named by the configuration, or the English list.
pub fn load_stopwords(config: &Config) -> Result<StopWords> {
    match &config.stopwords_file {
        Some(path) => StopWords::from_file(path),
        None => Ok(StopWords::english()),
    }
}
