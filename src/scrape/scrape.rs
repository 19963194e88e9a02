// src/scrape/scrape.rs
use std::{
    thread,
    sync::{ mpsc, Arc, atomic::{ AtomicUsize, Ordering }},
};

use crate::{
    config::options::{ Endpoint, ScrapeOptions },
    core::Fetcher,
    data::{ AggregateResult, PageResult },
    error::ScrapeError,
    progress::Progress,
    specs::MatchTable,
};

/// Fetch and extract every endpoint, concatenating rows in list order.
///
/// With `workers <= 1` pages are fetched one at a time, in order. With more
/// workers fetches overlap, but pages are still reassembled by list position.
/// The first failing URL (by list position) aborts the whole run; no partial
/// result is returned.
pub fn collect_rows(
    opts: &ScrapeOptions,
    fetcher: &dyn Fetcher,
    table: &MatchTable,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<AggregateResult, ScrapeError> {
    let endpoints = &opts.endpoints;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(endpoints.len());
    }

    let result = if opts.workers <= 1 || endpoints.len() <= 1 {
        collect_sequential(endpoints, fetcher, table, progress.as_deref_mut())
    } else {
        collect_parallel(endpoints, opts.workers, fetcher, table, progress.as_deref_mut())
    };

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    let rows = result?;
    log::info!("Collected {} rows from {} pages", rows.len(), endpoints.len());
    Ok(rows)
}

fn fetch_page(
    endpoint: &Endpoint,
    fetcher: &dyn Fetcher,
    table: &MatchTable,
) -> Result<PageResult, ScrapeError> {
    let html = fetcher.fetch(&endpoint.url).map_err(|source| ScrapeError::Network {
        url: endpoint.url.clone(),
        source,
    })?;
    Ok(table.extract(&html))
}

fn collect_sequential(
    endpoints: &[Endpoint],
    fetcher: &dyn Fetcher,
    table: &MatchTable,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<AggregateResult, ScrapeError> {
    let mut out = AggregateResult::default();

    for (i, ep) in endpoints.iter().enumerate() {
        log::debug!("scraping from {}", ep.url);
        if let Some(p) = progress.as_deref_mut() {
            p.fetching(i, &ep.url);
        }

        let page = fetch_page(ep, fetcher, table)?;

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i, page.len());
        }
        out.push_page(page);
    }

    Ok(out)
}

enum Msg {
    Started(usize),
    Done(usize, Result<PageResult, ScrapeError>),
}

fn collect_parallel(
    endpoints: &[Endpoint],
    workers: usize,
    fetcher: &dyn Fetcher,
    table: &MatchTable,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<AggregateResult, ScrapeError> {
    let counter = Arc::new(AtomicUsize::new(0));
    let (tx, rx) = mpsc::channel::<Msg>();
    let workers = workers.min(endpoints.len()).max(1);

    // Slot per endpoint; filled in completion order, read back in list order.
    let mut pages: Vec<Option<PageResult>> = vec![None; endpoints.len()];
    let mut first_err: Option<(usize, ScrapeError)> = None;

    thread::scope(|s| {
        for _ in 0..workers {
            let idx = Arc::clone(&counter);
            let tx = tx.clone();

            s.spawn(move || {
                loop {
                    let i = idx.fetch_add(1, Ordering::Relaxed);
                    if i >= endpoints.len() {
                        break;
                    }
                    if tx.send(Msg::Started(i)).is_err() {
                        break;
                    }
                    let result = fetch_page(&endpoints[i], fetcher, table);
                    let failed = result.is_err();
                    let _ = tx.send(Msg::Done(i, result));
                    if failed {
                        // stop handing out new work
                        idx.store(endpoints.len(), Ordering::Relaxed);
                        break;
                    }
                }
            });
        }
        drop(tx); // main thread is sole receiver now

        for msg in rx.iter() {
            match msg {
                Msg::Started(i) => {
                    log::debug!("scraping from {}", endpoints[i].url);
                    if let Some(p) = progress.as_deref_mut() {
                        p.fetching(i, &endpoints[i].url);
                    }
                }
                Msg::Done(i, Ok(page)) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(i, page.len());
                    }
                    pages[i] = Some(page);
                }
                Msg::Done(i, Err(e)) => {
                    log::debug!("Page {i} failed: {e}");
                    if first_err.as_ref().is_none_or(|(j, _)| i < *j) {
                        first_err = Some((i, e));
                    }
                }
            }
        }
    });

    if let Some((_, e)) = first_err {
        return Err(e);
    }

    Ok(AggregateResult::from_pages(pages.into_iter().flatten()))
}
