use crate::error::{Error, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_CONTENT_SELECTOR: &str = "div.mw-content-container";
pub const DEFAULT_LINK_PREFIX: &str = "http://";
pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[derive(Debug, Clone)]
pub struct Config {
    pub user_agent: String,
    pub timeout: Duration,
    pub content_selector: String,
    pub link_prefix: String,
    pub dictionary_url: String,
    pub stopwords_file: Option<PathBuf>,
    pub bind_addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            user_agent: format!("wordscrape/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(10),
            content_selector: DEFAULT_CONTENT_SELECTOR.to_string(),
            link_prefix: DEFAULT_LINK_PREFIX.to_string(),
            dictionary_url: DEFAULT_DICTIONARY_URL.to_string(),
            stopwords_file: None,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 7878)),
        }
    }
}

impl Config {
    /// Reads `WORDSCRAPE_*` variables from the environment or a `.env` file,
    /// keeping the default for anything unset.
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();
        if let Some(user_agent) = var("WORDSCRAPE_USER_AGENT") {
            config.user_agent = user_agent;
        }
        if let Some(secs) = var("WORDSCRAPE_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(parse("WORDSCRAPE_TIMEOUT_SECS", &secs)?);
        }
        if let Some(selector) = var("WORDSCRAPE_CONTENT_SELECTOR") {
            config.content_selector = selector;
        }
        if let Some(prefix) = var("WORDSCRAPE_LINK_PREFIX") {
            config.link_prefix = prefix;
        }
        if let Some(url) = var("WORDSCRAPE_DICTIONARY_URL") {
            config.dictionary_url = url;
        }
        config.stopwords_file = var("WORDSCRAPE_STOPWORDS_FILE").map(PathBuf::from);
        if let Some(addr) = var("WORDSCRAPE_BIND_ADDR") {
            config.bind_addr = parse("WORDSCRAPE_BIND_ADDR", &addr)?;
        }
        Ok(config)
    }
}

fn var(name: &str) -> Option<String> {
    dotenv::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse<T: FromStr>(name: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| Error::Config(format!("{} = {:?}: {}", name, value, e)))
}
