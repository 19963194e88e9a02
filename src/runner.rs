// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::AppOptions,
    core::Fetcher,
    data::Row,
    error::ScrapeError,
    file::write_results,
    progress::Progress,
    scrape::collect_rows,
    specs::MatchTable,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub path: PathBuf,
    pub rows: usize,
}

/// Top-level pipeline: fetch → extract → flatten → write.
/// The output file is only touched after every page was fetched, so any
/// failure before that leaves no file behind.
pub fn run(
    opts: &AppOptions,
    fetcher: &dyn Fetcher,
    progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary, ScrapeError> {
    let result = run_inner(opts, fetcher, progress);
    if let Err(e) = &result {
        log::error!("{} stage failed: {e}", e.stage());
    }
    result
}

fn run_inner(
    opts: &AppOptions,
    fetcher: &dyn Fetcher,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary, ScrapeError> {
    let table = MatchTable::new(&opts.scrape.table_id)?;
    let rows = collect_rows(&opts.scrape, fetcher, &table, progress.as_deref_mut())?;

    let path = opts.export.out_path.clone();
    write_results(&path, &Row::header(), &rows)?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Wrote {} rows to {}", rows.len(), path.display()));
    }

    Ok(RunSummary { path, rows: rows.len() })
}
