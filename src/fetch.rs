use crate::config::Config;
use crate::error::{Error, Result};
use reqwest::{Client, Url};
use tracing::info;

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Fetcher { client })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Downloads the page body. Non-success statuses count as network failures.
    pub async fn fetch_html(&self, url: &str) -> Result<String> {
        let url = parse_page_url(url)?;
        info!("fetching {}", url);
        let response = self.client.get(url.clone()).send().await?.error_for_status()?;
        let body = response.text().await?;
        info!("fetched {} ({} bytes)", url, body.len());
        Ok(body)
    }
}

pub fn parse_page_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url.trim())
        .map_err(|e| Error::InvalidArgument(format!("bad url {:?}: {}", url, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(Error::InvalidArgument(format!(
            "unsupported scheme {:?} in {:?}",
            scheme, url
        ))),
    }
}
