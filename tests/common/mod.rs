// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use shogi_scrape::{BoxError, Fetcher};

/// In-memory pages keyed by URL, with optional per-URL delay.
#[derive(Default)]
pub struct MockFetcher {
    pages: HashMap<String, Result<String, String>>,
    delays: HashMap<String, Duration>,
    pub calls: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: String) -> Self {
        self.pages.insert(url.to_string(), Ok(html));
        self
    }

    pub fn failing(mut self, url: &str, msg: &str) -> Self {
        self.pages.insert(url.to_string(), Err(msg.to_string()));
        self
    }

    pub fn delay(mut self, url: &str, ms: u64) -> Self {
        self.delays.insert(url.to_string(), Duration::from_millis(ms));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Fetcher for MockFetcher {
    fn fetch(&self, url: &str) -> Result<String, BoxError> {
        self.calls.lock().unwrap().push(url.to_string());
        if let Some(d) = self.delays.get(url) {
            thread::sleep(*d);
        }
        match self.pages.get(url) {
            Some(Ok(html)) => Ok(html.clone()),
            Some(Err(msg)) => Err(msg.clone().into()),
            None => Err(format!("404 Not Found: {url}").into()),
        }
    }
}

/// Season page with one body row per `(date, side, result)`.
pub fn season_page(rows: &[(&str, &str, &str)]) -> String {
    let mut body = String::new();
    for (n, (date, side, result)) in rows.iter().enumerate() {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{date}</td><td>{side}</td><td>{result}</td><td>相手</td></tr>\n",
            n + 1
        ));
    }
    format!(
        r#"<html><body>
        <table id="matchTable1">
          <thead><tr><th>No</th><th>日付</th><th>手番</th><th>勝敗</th><th>相手</th></tr></thead>
          <tbody>
{body}          </tbody>
        </table>
        </body></html>"#
    )
}

pub fn season_url(year: u32) -> String {
    format!("http://kenyu1234.php.xdomain.jp/persony.php?name=594&je={year}")
}
