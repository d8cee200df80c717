use std::cell::RefCell;

use cdt::{CdtError, Config, Crawler, Fetch, Lookup, Page};
use reqwest::{StatusCode, Url};

/// Serves one canned page and remembers every URL it was asked for.
struct CannedFetcher {
    status: StatusCode,
    final_url: &'static str,
    body: &'static str,
    requested: RefCell<Vec<Url>>,
}

impl CannedFetcher {
    fn new(status: StatusCode, final_url: &'static str, body: &'static str) -> Self {
        Self {
            status,
            final_url,
            body,
            requested: RefCell::new(Vec::new()),
        }
    }

    fn ok(body: &'static str) -> Self {
        Self::new(
            StatusCode::OK,
            "https://dictionary.cambridge.org/us/dictionary/english/record",
            body,
        )
    }
}

impl Fetch for CannedFetcher {
    fn fetch(&self, url: &Url) -> cdt::Result<Page> {
        self.requested.borrow_mut().push(url.clone());
        Ok(Page {
            status: self.status,
            url: Url::parse(self.final_url).expect("valid canned url"),
            body: self.body.to_string(),
        })
    }
}

struct FailingFetcher;

impl Fetch for FailingFetcher {
    fn fetch(&self, _url: &Url) -> cdt::Result<Page> {
        Err(CdtError::BuildRequestUrl(url::ParseError::EmptyHost))
    }
}

const RECORD_PAGE: &str = r#"
<div data-tab="ds-american-english">
  <div class="entry-body__el">
    <div class="pos-header">
      <span class="pos">noun</span>
      <span pron-region="US" class="pron-info"><span class="pron">/ˈrek.ɚd/</span></span>
    </div>
  </div>
  <div class="entry-body__el">
    <div class="pos-header">
      <span class="pos">verb</span>
      <span pron-region="US" class="pron-info"><span class="pron">/rɪˈkɔːrd/</span></span>
    </div>
  </div>
  <div class="entry-body__el">
    <div class="pos-header">
      <span class="pos">adjective</span>
      <span pron-region="US" class="pron-info"><span class="pron">/ˈrek.ɚd/</span></span>
    </div>
  </div>
</div>
"#;

#[test]
fn crawls_every_entry_with_pos() {
    let crawler = Crawler::with_fetcher(Config::default(), CannedFetcher::ok(RECORD_PAGE));
    let lines = crawler.crawl("record", true).expect("expected crawl to succeed");
    assert_eq!(
        lines,
        vec!["noun:/ˈrek.ɚd/", "verb:/rɪˈkɔːrd/", "adjective:/ˈrek.ɚd/"]
    );
}

#[test]
fn dedups_pronunciations_without_pos() {
    let crawler = Crawler::with_fetcher(Config::default(), CannedFetcher::ok(RECORD_PAGE));
    let lines = crawler.crawl("record", false).expect("expected crawl to succeed");
    assert_eq!(lines, vec!["/ˈrek.ɚd/", "/rɪˈkɔːrd/"]);
}

#[test]
fn not_found_is_unresolved_regardless_of_need_pos() {
    let fetcher = CannedFetcher::new(
        StatusCode::NOT_FOUND,
        "https://dictionary.cambridge.org/us/search/english/direct/?q=zzzz",
        RECORD_PAGE,
    );
    let crawler = Crawler::with_fetcher(Config::default(), fetcher);
    assert_eq!(crawler.crawl("zzzz", true).expect("crawl"), vec!["None:None"]);
    assert_eq!(crawler.crawl("zzzz", false).expect("crawl"), vec!["None:None"]);
}

#[test]
fn spellcheck_redirect_is_unresolved() {
    let fetcher = CannedFetcher::new(
        StatusCode::OK,
        "http://dictionary.cambridge.org/us/spellcheck/english/?q=hve",
        RECORD_PAGE,
    );
    let crawler = Crawler::with_fetcher(Config::default(), fetcher);
    assert_eq!(crawler.lookup("hve").expect("lookup"), Lookup::Unresolved);
    assert_eq!(crawler.crawl("hve", false).expect("crawl"), vec!["None:None"]);
}

#[test]
fn page_without_language_tab_is_unresolved() {
    let crawler = Crawler::with_fetcher(
        Config::default(),
        CannedFetcher::ok("<html><body><p>Sorry</p></body></html>"),
    );
    assert_eq!(crawler.crawl("record", true).expect("crawl"), vec!["None:None"]);
}

#[test]
fn server_error_page_is_still_parsed() {
    let fetcher = CannedFetcher::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        "https://dictionary.cambridge.org/us/dictionary/english/record",
        RECORD_PAGE,
    );
    let crawler = Crawler::with_fetcher(Config::default(), fetcher);
    assert_eq!(crawler.crawl("record", true).expect("crawl").len(), 3);
}

#[test]
fn repeated_crawls_are_identical() {
    let crawler = Crawler::with_fetcher(Config::default(), CannedFetcher::ok(RECORD_PAGE));
    let first = crawler.crawl("record", false).expect("crawl");
    let second = crawler.crawl("record", false).expect("crawl");
    assert_eq!(first, second);
}

#[test]
fn requests_search_url_with_word() {
    let fetcher = CannedFetcher::ok(RECORD_PAGE);
    let crawler = Crawler::with_fetcher(Config::default(), &fetcher);
    crawler.crawl("record", true).expect("crawl");
    crawler.crawl("ice cream", true).expect("crawl");

    let requested: Vec<String> = fetcher
        .requested
        .borrow()
        .iter()
        .map(|url| url.to_string())
        .collect();
    assert_eq!(
        requested,
        vec![
            "https://dictionary.cambridge.org/us/search/english/direct/?q=record",
            "https://dictionary.cambridge.org/us/search/english/direct/?q=ice+cream",
        ]
    );
}

#[test]
fn uses_configured_search_url() {
    let config = Config {
        search_url: "http://localhost:8080/search".to_string(),
        ..Config::default()
    };
    let fetcher = CannedFetcher::ok(RECORD_PAGE);
    let crawler = Crawler::with_fetcher(config, &fetcher);
    assert_eq!(crawler.config().search_url, "http://localhost:8080/search");
    crawler.crawl("have", true).expect("crawl");
    assert_eq!(
        fetcher.requested.borrow()[0].as_str(),
        "http://localhost:8080/search?q=have"
    );
}

#[test]
fn transport_errors_propagate() {
    let crawler = Crawler::with_fetcher(Config::default(), FailingFetcher);
    assert!(crawler.crawl("have", true).is_err());
}
