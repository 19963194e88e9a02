// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific extraction. Each spec knows *where the data lives in the HTML*
//! for one kind of page and turns markup into rows.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-fetched markup (`scraper` / html5ever tree).
//! - **Selector choice**: which table, which rows, which cells.
//!
//! ## What does **not** live here
//! - **Networking** (`core::net`), **ordering across pages** (`scrape`), and
//!   **output formatting** (`csv`, `file`).
//!
//! ## Typical call chain
//! ```text
//! runner::run → scrape::collect_rows → Fetcher::fetch
//!                                    ↘ specs::match_table::MatchTable::extract
//!             → file::write_results
//! ```
//!
//! ## Conventions
//! - A page without the expected table is an empty result, never an error.
//! - Column shapes are fixed per spec (match table = `date, first_or_second, result`).
pub mod match_table;

pub use match_table::{extract, MatchTable};
