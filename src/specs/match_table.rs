// src/specs/match_table.rs
//! Scraping *spec* for the match-results table.
//!
//! Purpose:
//! - Parse one season page and pull every body row of `table#matchTable1`.
//! - Each row becomes `(date, first_or_second, result)` from `td` cells 2, 3 and 4.
//!
//! Layout assumed (one row per game):
//! ```text
//! <table id="matchTable1">
//!   <thead>…</thead>
//!   <tbody>
//!     <tr><td>No</td><td>date</td><td>先手/後手</td><td>勝ち/負け</td>…</tr>
//!   </tbody>
//! </table>
//! ```
//!
//! Non-Responsibilities:
//! - **No networking.** The caller hands in the markup.
//! - **No ordering across pages.** That is `scrape::collect_rows`.

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::TABLE_ID;
use crate::data::{PageResult, Row};
use crate::error::ScrapeError;

/// 1-based positions of the wanted `td` cells inside a body row.
const DATE_CELL: usize = 2;
const SIDE_CELL: usize = 3;
const RESULT_CELL: usize = 4;

/// Compiled row selector for one results table.
#[derive(Debug)]
pub struct MatchTable {
    rows: Selector,
}

impl MatchTable {
    /// Select the direct children of `tbody` in every `table` whose id is `table_id`.
    pub fn new(table_id: &str) -> Result<Self, ScrapeError> {
        let selector = row_selector(table_id);
        let rows = Selector::parse(&selector).map_err(|e| ScrapeError::Parse {
            selector: selector.clone(),
            message: e.to_string(),
        })?;
        Ok(Self { rows })
    }

    /// Rows in document order. A page without the table yields no rows.
    /// Missing cells come back as empty strings.
    pub fn extract(&self, document: &str) -> PageResult {
        let t = std::time::Instant::now();
        let doc = Html::parse_document(document);

        let out: PageResult = doc
            .select(&self.rows)
            .map(|tr| {
                let cells: Vec<ElementRef> = td_children(tr).collect();
                Row {
                    date: cell_text(&cells, DATE_CELL),
                    first_or_second: cell_text(&cells, SIDE_CELL),
                    result: cell_text(&cells, RESULT_CELL),
                }
            })
            .collect();

        log::debug!("Extracted {} rows in {:?}", out.len(), t.elapsed());
        out
    }
}

/// Extract with the built-in table id.
pub fn extract(document: &str) -> PageResult {
    // TABLE_ID is a plain identifier, so the selector always compiles.
    MatchTable::new(TABLE_ID)
        .map(|t| t.extract(document))
        .unwrap_or_default()
}

fn row_selector(table_id: &str) -> String {
    let id = table_id.replace('\\', "\\\\").replace('"', "\\\"");
    format!(r#"table[id="{id}"] > tbody > *"#)
}

fn td_children(row: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "td")
}

fn cell_text(cells: &[ElementRef], pos: usize) -> String {
    cells
        .get(pos - 1)
        .map(|td| td.text().collect::<String>())
        .unwrap_or_else(|| s!())
}
