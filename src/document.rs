use crate::error::Result;
use crate::extract::Extractor;
use crate::fetch::Fetcher;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Url(String),
    Text,
}

#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub source: Source,
    pub content: String,
    pub links: Vec<String>,
}

impl Document {
    pub async fn from_url(fetcher: &Fetcher, extractor: &Extractor, url: &str) -> Result<Self> {
        let html = fetcher.fetch_html(url).await?;
        Document::from_html(extractor, url, &html)
    }

    pub fn from_html(extractor: &Extractor, url: &str, html: &str) -> Result<Self> {
        let content = extractor.extract_content(html)?;
        let links = extractor.extract_links(html);
        Ok(Document {
            source: Source::Url(url.to_string()),
            content,
            links,
        })
    }

    pub fn from_text(text: &str) -> Self {
        Document {
            source: Source::Text,
            content: text.to_string(),
            links: Vec::new(),
        }
    }
}
