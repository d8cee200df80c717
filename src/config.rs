use std::time::Duration;

use reqwest::Url;

use crate::{CdtError, Result};

pub const CAMBRIDGE_SEARCH_URL: &str = "https://dictionary.cambridge.org/us/search/english/direct/";
pub const CAMBRIDGE_SPELLCHECK_PATH: &str = "/us/spellcheck/english/";
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how to look words up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Search endpoint; the word is sent as its `q` query parameter.
    pub search_url: String,
    /// Path prefix the site redirects to when it does not know a word.
    pub spellcheck_path: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_url: CAMBRIDGE_SEARCH_URL.to_string(),
            spellcheck_path: CAMBRIDGE_SPELLCHECK_PATH.to_string(),
            user_agent: BROWSER_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Build the search URL for `word`, percent-encoding it as the `q` parameter.
    pub fn lookup_url(&self, word: &str) -> Result<Url> {
        Url::parse_with_params(&self.search_url, &[("q", word)]).map_err(CdtError::BuildRequestUrl)
    }

    /// Whether `url` is the spell-check page. Matches on path only, so an
    /// http to https upgrade along the redirect chain does not matter.
    pub fn is_spellcheck(&self, url: &Url) -> bool {
        url.path().starts_with(&self.spellcheck_path)
    }
}
