// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod file;
pub mod logging;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod specs;

pub use crate::core::{Fetcher, HttpFetcher};
pub use data::{AggregateResult, PageResult, Row};
pub use error::{BoxError, ScrapeError};
