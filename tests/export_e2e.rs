// tests/export_e2e.rs
//
// Full pipeline (fetch → extract → write) into a temp directory.
//
mod common;

use std::fs;
use std::path::PathBuf;

use common::{season_page, season_url, MockFetcher};
use shogi_scrape::config::options::{AppOptions, Endpoint};
use shogi_scrape::csv::{parse_rows, SEP};
use shogi_scrape::progress::Progress;
use shogi_scrape::runner;
use shogi_scrape::ScrapeError;

fn options(out: PathBuf, years: &[u32]) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.scrape.endpoints = years.iter().map(|&y| Endpoint::new(season_url(y))).collect();
    opts.export.out_path = out;
    opts
}

#[test]
fn single_row_writes_two_line_csv() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("data").join("fujii.csv");
    let fetcher = MockFetcher::new()
        .page(&season_url(2016), season_page(&[("2016-06-01", "先手", "勝ち")]));

    let summary = runner::run(&options(out.clone(), &[2016]), &fetcher, None).unwrap();

    assert_eq!(summary.rows, 1);
    assert_eq!(summary.path, out);
    let text = fs::read_to_string(&out).unwrap();
    assert_eq!(text, "date,first_or_second,result\n2016-06-01,先手,勝ち\n");
}

#[test]
fn written_csv_reads_back_to_same_rows() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("results.csv");
    let fetcher = MockFetcher::new()
        .page(&season_url(2017), season_page(&[
            ("2017-01-26", "先手", "勝ち"),
            ("2017-07-02", "後手", "負け, 千日手"),
        ]))
        .page(&season_url(2018), season_page(&[
            ("2018-02-17", "先手", "\"勝ち\""),
        ]));

    runner::run(&options(out.clone(), &[2017, 2018]), &fetcher, None).unwrap();

    let back = parse_rows(&fs::read_to_string(&out).unwrap(), SEP);
    let expected: Vec<Vec<String>> = vec![
        vec!["date", "first_or_second", "result"],
        vec!["2017-01-26", "先手", "勝ち"],
        vec!["2017-07-02", "後手", "負け, 千日手"],
        vec!["2018-02-17", "先手", "\"勝ち\""],
    ]
    .into_iter()
    .map(|r| r.into_iter().map(String::from).collect())
    .collect();
    assert_eq!(back, expected);
}

#[test]
fn failed_fetch_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("data").join("fujii.csv");
    let fetcher = MockFetcher::new()
        .page(&season_url(2016), season_page(&[("2016-12-24", "後手", "勝ち")]))
        .page(&season_url(2017), season_page(&[("2017-01-26", "先手", "勝ち")]))
        .failing(&season_url(2018), "connection refused")
        .page(&season_url(2019), season_page(&[("2019-04-04", "先手", "負け")]));

    let err = runner::run(&options(out.clone(), &[2016, 2017, 2018, 2019]), &fetcher, None)
        .unwrap_err();

    assert!(matches!(err, ScrapeError::Network { .. }));
    assert_eq!(err.stage(), "fetch");
    assert!(!out.exists());
    assert!(!out.parent().unwrap().exists());
}

#[test]
fn existing_file_is_overwritten_not_appended() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("fujii.csv");
    fs::write(&out, "stale,content,here\nx,y,z\n").unwrap();

    let fetcher = MockFetcher::new()
        .page(&season_url(2019), season_page(&[("2019-04-04", "先手", "負け")]));
    runner::run(&options(out.clone(), &[2019]), &fetcher, None).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    assert_eq!(text, "date,first_or_second,result\n2019-04-04,先手,負け\n");
}

#[test]
fn no_rows_still_writes_header() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty.csv");
    let fetcher = MockFetcher::new()
        .page(&season_url(2016), "<html><body></body></html>".to_string());

    let summary = runner::run(&options(out.clone(), &[2016]), &fetcher, None).unwrap();
    assert_eq!(summary.rows, 0);
    assert_eq!(fs::read_to_string(&out).unwrap(), "date,first_or_second,result\n");
}

#[test]
fn unwritable_destination_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    // parent "exists" as a regular file
    let blocker = dir.path().join("data");
    fs::write(&blocker, "").unwrap();
    let out = blocker.join("fujii.csv");

    let fetcher = MockFetcher::new()
        .page(&season_url(2016), season_page(&[("2016-12-24", "後手", "勝ち")]));
    let err = runner::run(&options(out.clone(), &[2016]), &fetcher, None).unwrap_err();

    match err {
        ScrapeError::Io { path, .. } => assert_eq!(path, out),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn bad_table_id_is_parse_error_before_any_fetch() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = options(dir.path().join("x.csv"), &[2016]);
    opts.scrape.table_id = "bad\nid".to_string();
    let fetcher = MockFetcher::new();

    let err = runner::run(&opts, &fetcher, None).unwrap_err();
    assert_eq!(err.stage(), "parse");
    assert!(matches!(err, ScrapeError::Parse { .. }));
    assert!(fetcher.calls().is_empty());
}

#[derive(Default)]
struct Lines {
    fetching: Vec<String>,
    messages: Vec<String>,
    finished: bool,
}

impl Progress for Lines {
    fn fetching(&mut self, _index: usize, url: &str) { self.fetching.push(url.to_string()); }
    fn log(&mut self, msg: &str) { self.messages.push(msg.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn progress_sees_each_url_then_the_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("fujii.csv");
    let fetcher = MockFetcher::new()
        .page(&season_url(2016), season_page(&[("2016-12-24", "後手", "勝ち")]))
        .page(&season_url(2017), season_page(&[("2017-01-26", "先手", "勝ち")]));
    let mut lines = Lines::default();

    runner::run(&options(out.clone(), &[2016, 2017]), &fetcher, Some(&mut lines)).unwrap();

    assert_eq!(lines.fetching, vec![season_url(2016), season_url(2017)]);
    assert!(lines.finished);
    assert_eq!(lines.messages, vec![format!("Wrote 2 rows to {}", out.display())]);
}

#[test]
fn progress_gets_no_output_message_when_a_fetch_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("fujii.csv");
    let fetcher = MockFetcher::new()
        .page(&season_url(2016), season_page(&[("2016-12-24", "後手", "勝ち")]))
        .failing(&season_url(2017), "connection refused");
    let mut lines = Lines::default();

    let err = runner::run(&options(out.clone(), &[2016, 2017]), &fetcher, Some(&mut lines));

    assert!(err.is_err());
    assert!(lines.finished);
    assert!(lines.messages.is_empty());
    assert!(!out.exists());
}
