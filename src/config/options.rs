// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// One page to fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub url: String,
}

impl Endpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Season page for one player, e.g. `persony.php?name=594&je=2016`.
    pub fn season(player: u32, year: u32) -> Self {
        Self::new(format!("{BASE_URL}?name={player}&je={year}"))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Pages to scrape; output keeps this order.
    pub endpoints: Vec<Endpoint>,
    /// `id` attribute of the results table.
    pub table_id: String,
    /// Fetch workers. 1 = strictly sequential.
    pub workers: usize,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            endpoints: default_endpoints(),
            table_id: s!(TABLE_ID),
            workers: WORKERS,
            timeout: None,
        }
    }
}

pub fn default_endpoints() -> Vec<Endpoint> {
    SEASONS.iter().map(|&y| Endpoint::season(PLAYER_ID, y)).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_FILE),
        }
    }
}
