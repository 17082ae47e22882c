//! Guide page sources.
//!
//! [`DocumentSource`] is the seam between the scraper and the network. The
//! HTTP implementation sends a browser user agent, applies the configured
//! timeout and transcodes the body to UTF-8. [`StaticSource`] serves pages
//! from memory for offline runs and tests.

use std::collections::HashMap;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE};
use tracing::debug;
use url::Url;

use crate::encoding::transcode_to_utf8;
use crate::{Error, Options, Result};

/// Something that can hand out the HTML of a guide page.
pub trait DocumentSource {
    /// Fetch a page as UTF-8 HTML.
    fn fetch(&self, url: &Url) -> Result<String>;
}

impl<T: DocumentSource + ?Sized> DocumentSource for &T {
    fn fetch(&self, url: &Url) -> Result<String> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP source.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client with the user agent and timeout from `options`.
    pub fn new(options: &Options) -> Result<Self> {
        let client = Client::builder()
            .user_agent(options.user_agent.as_str())
            .timeout(options.timeout)
            .build()
            .map_err(|source| Error::Fetch { url: String::new(), source })?;
        Ok(Self { client })
    }
}

impl DocumentSource for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String> {
        let response = self
            .client
            .get(url.as_str())
            .header(ACCEPT, "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.5")
            .send()
            .map_err(|source| Error::Fetch { url: url.to_string(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http { url: url.to_string(), status: status.as_u16() });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response
            .bytes()
            .map_err(|source| Error::Fetch { url: url.to_string(), source })?;
        debug!(%url, bytes = bytes.len(), "fetched guide page");

        Ok(transcode_to_utf8(&bytes, content_type.as_deref()))
    }
}

/// In-memory pages keyed by URL. Unknown URLs answer 404.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pages: HashMap<String, String>,
}

impl StaticSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for `url`.
    #[must_use]
    pub fn with_page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), html.into());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl DocumentSource for StaticSource {
    fn fetch(&self, url: &Url) -> Result<String> {
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| Error::Http { url: url.to_string(), status: 404 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_source_serves_known_pages() {
        let source = StaticSource::new().with_page("https://example.com/a", "<li>60x Peacebloom</li>");
        let url = Url::parse("https://example.com/a").unwrap();
        assert_eq!(source.fetch(&url).unwrap(), "<li>60x Peacebloom</li>");
        assert_eq!(source.len(), 1);
    }

    #[test]
    fn static_source_misses_are_http_errors() {
        let source = StaticSource::new();
        let url = Url::parse("https://example.com/missing").unwrap();
        assert!(matches!(source.fetch(&url), Err(Error::Http { status: 404, .. })));
        assert!(source.is_empty());
    }

    #[test]
    fn http_fetcher_builds_from_default_options() {
        assert!(HttpFetcher::new(&Options::default()).is_ok());
    }
}
