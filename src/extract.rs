//! Page structure extraction.
//!
//! The content container and link prefix are page specific and come from
//! configuration.

use crate::config::Config;
use crate::error::{Error, Result};
use scraper::{Html, Selector};
use tracing::warn;

pub struct Extractor {
    content: Selector,
    content_selector: String,
    anchors: Selector,
    link_prefix: String,
}

impl Extractor {
    pub fn new(content_selector: &str, link_prefix: &str) -> Result<Self> {
        Ok(Extractor {
            content: parse_selector(content_selector)?,
            content_selector: content_selector.to_string(),
            anchors: parse_selector("a[href]")?,
            link_prefix: link_prefix.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Extractor::new(&config.content_selector, &config.link_prefix)
    }

    /// Text of the first element matching the content selector, with
    /// `script` and `style` bodies left out.
    pub fn extract_content(&self, html: &str) -> Result<String> {
        let document = Html::parse_document(html);
        let container = document.select(&self.content).next().ok_or_else(|| {
            warn!("no element matches {:?}", self.content_selector);
            Error::NotFound(format!("no element matches {:?}", self.content_selector))
        })?;

        let mut content = String::new();
        for node in container.descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let hidden = node
                .parent()
                .and_then(|parent| parent.value().as_element().map(|e| e.name()))
                .is_some_and(|name| name == "script" || name == "style");
            if !hidden {
                content.push_str(text);
            }
        }
        Ok(content)
    }

    /// Every anchor href starting with the link prefix, in document order.
    pub fn extract_links(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        document
            .select(&self.anchors)
            .filter_map(|anchor| anchor.value().attr("href"))
            .filter(|href| href.starts_with(&self.link_prefix))
            .map(str::to_string)
            .collect()
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| Error::Config(format!("invalid selector {:?}: {:?}", selector, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html>
<head><title>Cake</title><style>.x { color: red }</style></head>
<body>
  <div id="nav"><a href="http://nav.example.com/">Navigation</a></div>
  <div class="mw-content-container">
    <h1>Cake</h1>
    <p>Cake is a form of <b>sweet</b> food.</p>
    <script>var tracking = "cake";</script>
    <p>See <a href="http://example.com/flour">flour</a>,
       <a href="https://example.com/sugar">sugar</a> and
       <a href="/wiki/Bread">bread</a>.</p>
  </div>
</body>
</html>"#;

    fn extractor() -> Extractor {
        Extractor::from_config(&Config::default()).unwrap()
    }

    #[test]
    fn test_extract_content() {
        let content = extractor().extract_content(PAGE).unwrap();
        assert!(content.contains("Cake is a form of sweet food."));
        assert!(content.contains("flour"));
        assert!(!content.contains("tracking"));
        assert!(!content.contains("Navigation"));
        assert!(!content.contains("color"));
    }

    #[test]
    fn test_missing_container() {
        let err = extractor()
            .extract_content("<html><body><p>nothing here</p></body></html>")
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_extract_links() {
        assert_eq!(
            extractor().extract_links(PAGE),
            vec!["http://nav.example.com/", "http://example.com/flour"]
        );
    }

    #[test]
    fn test_extract_links_with_other_prefix() {
        let extractor = Extractor::new("main", "https://").unwrap();
        assert_eq!(extractor.extract_links(PAGE), vec!["https://example.com/sugar"]);
        assert!(extractor.extract_links("<p>no anchors</p>").is_empty());
    }

    #[test]
    fn test_invalid_selector() {
        assert!(matches!(
            Extractor::new("div[", "http://"),
            Err(Error::Config(_))
        ));
    }
}
