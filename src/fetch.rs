//! One-shot page retrieval.

use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};

use crate::config::Config;
use crate::{CdtError, Result};

/// A fetched dictionary page.
#[derive(Debug, Clone)]
pub struct Page {
    pub status: StatusCode,
    /// Final URL after redirects.
    pub url: Url,
    pub body: String,
}

/// Fetches a single page. Implemented over HTTP by [`HttpFetcher`]; tests and
/// callers with their own transport can provide another implementation.
pub trait Fetch {
    fn fetch(&self, url: &Url) -> Result<Page>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, url: &Url) -> Result<Page> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP fetcher. Non-success statuses are returned as pages, not errors.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(CdtError::CreateHttpClient)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<Page> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(CdtError::FetchPage)?;
        let status = response.status();
        let final_url = response.url().clone();
        let body = response.text().map_err(CdtError::ReadResponse)?;
        Ok(Page {
            status,
            url: final_url,
            body,
        })
    }
}
