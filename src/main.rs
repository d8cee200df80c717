use std::process::ExitCode;
use std::time::Duration;

use cdt::{Config, Crawler};
use clap::Parser;
use tracing_subscriber::EnvFilter;

const SAMPLE_WORD: &str = "have";

/// Print part-of-speech and pronunciation pairs from the Cambridge Dictionary.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Words to look up. Looks up "have" when none are given.
    words: Vec<String>,

    /// Print only distinct pronunciations, without parts of speech.
    #[arg(long)]
    no_pos: bool,

    /// Search endpoint; the word is appended as the `q` query parameter.
    #[arg(long, env = "CDT_SEARCH_URL", default_value = cdt::CAMBRIDGE_SEARCH_URL)]
    search_url: String,

    #[arg(long, env = "CDT_USER_AGENT", default_value = cdt::BROWSER_USER_AGENT)]
    user_agent: String,

    /// Request timeout in seconds.
    #[arg(long, env = "CDT_TIMEOUT", default_value_t = 10)]
    timeout: u64,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            search_url: self.search_url.clone(),
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.timeout),
            ..Config::default()
        }
    }
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    let crawler = match Crawler::new(args.config()) {
        Ok(crawler) => crawler,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let words = if args.words.is_empty() {
        vec![SAMPLE_WORD.to_string()]
    } else {
        args.words.clone()
    };

    let mut status = ExitCode::SUCCESS;
    for word in &words {
        match crawler.crawl(word, !args.no_pos) {
            Ok(lines) => println!("{word}\t{}", lines.join(", ")),
            Err(err) => {
                eprintln!("{word}: {err}");
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
