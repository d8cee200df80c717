//! `cdt` library API.
//!
//! Looks a word up on the Cambridge Dictionary and returns, for every
//! part-of-speech entry on the page, its pronunciation.

mod config;
mod extract;
mod fetch;
mod sense;

use reqwest::StatusCode;

pub use config::{
    Config, BROWSER_USER_AGENT, CAMBRIDGE_SEARCH_URL, CAMBRIDGE_SPELLCHECK_PATH, DEFAULT_TIMEOUT,
};
pub use extract::{get_pos, get_pron, parse_entry_page};
pub use fetch::{Fetch, HttpFetcher, Page};
pub use sense::{Lookup, Sense, NO_POS, NO_PRON, UNRESOLVED};

/// Error type returned by `cdt` public APIs.
///
/// Words the dictionary does not know are not errors; they come back as
/// [`Lookup::Unresolved`].
#[derive(Debug, thiserror::Error)]
pub enum CdtError {
    #[error("Failed to create HTTP client: {0}")]
    CreateHttpClient(#[source] reqwest::Error),
    #[error("Failed to build request URL: {0}")]
    BuildRequestUrl(#[source] url::ParseError),
    #[error("Failed to fetch entry page: {0}")]
    FetchPage(#[source] reqwest::Error),
    #[error("Failed to read response: {0}")]
    ReadResponse(#[source] reqwest::Error),
    #[error("Failed to parse CSS selector: {0}")]
    ParseCssSelector(&'static str),
}

pub type Result<T> = std::result::Result<T, CdtError>;

/// Looks words up through a [`Fetch`] implementation.
///
/// Holds no state between calls besides its configuration and transport.
#[derive(Debug, Clone)]
pub struct Crawler<F = HttpFetcher> {
    config: Config,
    fetcher: F,
}

impl Crawler<HttpFetcher> {
    /// Crawler over HTTP.
    ///
    /// # Errors
    ///
    /// Returns [`CdtError::CreateHttpClient`] if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self { config, fetcher })
    }
}

impl<F: Fetch> Crawler<F> {
    pub fn with_fetcher(config: Config, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch the entry page for `word` and extract its senses.
    ///
    /// A 404 or a redirect to the spell-check page yields
    /// [`Lookup::Unresolved`]; no retry is attempted.
    ///
    /// # Errors
    ///
    /// Returns [`CdtError`] when URL building, the request, reading the body,
    /// or selector parsing fails.
    pub fn lookup(&self, word: &str) -> Result<Lookup> {
        tracing::info!(word, "looking up word");

        let url = self.config.lookup_url(word)?;
        let page = self.fetcher.fetch(&url)?;

        if page.status == StatusCode::NOT_FOUND {
            tracing::warn!(word, status = page.status.as_u16(), "word not found");
            return Ok(Lookup::Unresolved);
        }
        if self.config.is_spellcheck(&page.url) {
            tracing::warn!(
                word,
                status = page.status.as_u16(),
                url = %page.url,
                "word not found, redirected to spell check"
            );
            return Ok(Lookup::Unresolved);
        }

        parse_entry_page(&page.body)
    }

    /// Look `word` up and render one line per entry.
    ///
    /// With `need_pos`, lines read `"<pos>:<pron>"`; without it, only distinct
    /// pronunciations are returned. Unknown words yield `["None:None"]`.
    ///
    /// # Errors
    ///
    /// Same as [`Crawler::lookup`].
    pub fn crawl(&self, word: &str, need_pos: bool) -> Result<Vec<String>> {
        Ok(self.lookup(word)?.into_lines(need_pos))
    }
}

/// Look `word` up on the Cambridge Dictionary with the default configuration.
///
/// # Errors
///
/// Returns [`CdtError`] when the HTTP client cannot be built, the request or
/// body read fails, or selector parsing fails.
pub fn crawl(word: &str, need_pos: bool) -> Result<Vec<String>> {
    Crawler::new(Config::default())?.crawl(word, need_pos)
}
