// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::config::consts::{TABLE_ID, WORKERS};
use crate::config::options::AppOptions;
use crate::core::HttpFetcher;
use crate::progress::{NullProgress, Progress};
use crate::runner;

/// Scrape shogi match results into a CSV file.
#[derive(Parser, Debug)]
#[command(name = "shogi_scrape", version, about)]
pub struct Args {
    /// Output CSV path; overwritten on every run
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// `id` of the results table
    #[arg(long, value_name = "ID", default_value = TABLE_ID)]
    pub table_id: String,

    /// Concurrent fetches; output order is unaffected
    #[arg(short, long, value_name = "N", default_value_t = WORKERS, value_parser = parse_workers)]
    pub workers: usize,

    /// Per-request timeout in seconds (default: wait indefinitely)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// No per-URL progress lines
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn into_options(self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.scrape.table_id = self.table_id;
        opts.scrape.workers = self.workers;
        opts.scrape.timeout = self.timeout.map(Duration::from_secs);
        if let Some(out) = self.out {
            opts.export.out_path = out;
        }
        opts
    }
}

fn parse_workers(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("{e}"))?;
    if n == 0 {
        return Err(s!("must be at least 1"));
    }
    Ok(n)
}

/// Prints one line per URL as it is fetched.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn fetching(&mut self, _index: usize, url: &str) {
        println!("scraping from {url}");
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::logging::init(args.verbose);

    let quiet = args.quiet;
    let opts = args.into_options();
    log::debug!("{opts:?}");

    let fetcher = HttpFetcher::new(opts.scrape.timeout).wrap_err("building HTTP client")?;

    let mut console = ConsoleProgress;
    let mut null = NullProgress;
    let progress: &mut dyn Progress = if quiet { &mut null } else { &mut console };

    let summary = runner::run(&opts, &fetcher, Some(progress))?;
    log::debug!("{summary:?}");
    Ok(())
}
