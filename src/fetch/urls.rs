// src/fetch/urls.rs
use url::Url;

use crate::error::{Result, ScrapeError};

/// The district listing URL a run was started with. Every detail page of the
/// run is resolved against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    base: Url,
}

impl RunContext {
    /// Validate `url` before anything touches the network or the output file.
    pub fn new(url: &str) -> Result<Self> {
        let base = Url::parse(url.trim()).map_err(|e| ScrapeError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        match base.scheme() {
            "http" | "https" => Ok(Self { base }),
            other => Err(ScrapeError::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme `{}`", other),
            }),
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// The base URL with its last `/`-delimited segment removed.
    pub fn main_part(&self) -> &str {
        let s = self.base.as_str();
        s.rsplit_once('/').map_or(s, |(head, _)| head)
    }

    /// Join a municipality link (as found on the listing page) onto the main part.
    pub fn resolve(&self, link: &str) -> Result<Url> {
        let full = format!("{}/{}", self.main_part(), link);
        Url::parse(&full).map_err(|e| ScrapeError::InvalidUrl {
            url: full,
            reason: e.to_string(),
        })
    }
}
