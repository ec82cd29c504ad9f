// src/fetch/mod.rs

use reqwest::blocking::Client;
use scraper::Html;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::{Result, ScrapeError};

pub mod urls;

pub use urls::RunContext;

/// Anything that can hand back the body of a page.
pub trait PageSource {
    fn get_text(&self, url: &Url) -> Result<String>;

    /// Fetch `url` and parse it into a navigable document.
    fn fetch(&self, url: &Url) -> Result<Html> {
        let body = self.get_text(url)?;
        Ok(Html::parse_document(&body))
    }
}

/// Blocking HTTP fetcher. Requests are sequential and never retried.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .gzip(true)
            .build()
            .map_err(ScrapeError::Client)?;
        Ok(Self { client })
    }
}

impl PageSource for HttpFetcher {
    fn get_text(&self, url: &Url) -> Result<String> {
        debug!("Fetching text from {}", url);
        let http_err = |source: reqwest::Error| ScrapeError::Http {
            url: url.to_string(),
            source,
        };
        let resp = self.client.get(url.clone()).send().map_err(http_err)?;
        if !resp.status().is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }
        resp.text().map_err(http_err)
    }
}
