use crate::config::Config;
use crate::error::{Error, Result};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
pub struct Meaning {
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Deserialize)]
pub struct Definition {
    pub definition: String,
}

/// Definitions from a free dictionary JSON API.
pub struct Dictionary {
    client: Client,
    base_url: Url,
}

impl Dictionary {
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("bad dictionary url {:?}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!("dictionary url {} cannot be a base", base_url)));
        }
        Ok(Dictionary { client, base_url })
    }

    pub fn from_config(client: Client, config: &Config) -> Result<Self> {
        Dictionary::new(client, &config.dictionary_url)
    }

    /// Gloss of the first sense of `word`.
    pub async fn define(&self, word: &str) -> Result<String> {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Err(Error::InvalidArgument("empty word".to_string()));
        }
        let url = self.entry_url(&word);
        info!("looking up {:?}", word);
        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(format!("no definition for {:?}", word)));
        }
        let entries: Vec<Entry> = response.error_for_status()?.json().await?;
        first_gloss(&entries).ok_or_else(|| Error::NotFound(format!("no definition for {:?}", word)))
    }

    fn entry_url(&self, word: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(word);
        }
        url
    }
}

pub fn first_gloss(entries: &[Entry]) -> Option<String> {
    entries
        .iter()
        .flat_map(|entry| &entry.meanings)
        .flat_map(|meaning| &meaning.definitions)
        .map(|definition| definition.definition.trim())
        .find(|gloss| !gloss.is_empty())
        .map(str::to_string)
}
