// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Error type used at the fetcher seam. Any transport or status failure fits.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Connection, timeout or non-success status while fetching one URL.
    #[error("fetch failed for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The row selector could not be built.
    #[error("invalid selector `{selector}`: {message}")]
    Parse { selector: String, message: String },

    /// Output file could not be created or written.
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScrapeError {
    /// Short name of the pipeline stage that failed, for log lines.
    pub fn stage(&self) -> &'static str {
        match self {
            ScrapeError::Network { .. } => "fetch",
            ScrapeError::Parse { .. } => "parse",
            ScrapeError::Io { .. } => "write",
        }
    }
}
