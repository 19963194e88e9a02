// src/data.rs
//
// Row-level data produced by the scrape.
//
// - Row: one match record, three text fields in column order.
// - PageResult: rows from a single page, in document order.
// - AggregateResult: pages concatenated in URL-list order; the only thing
//                    handed to the writer.

/// Column names, in output order.
pub const HEADER: [&str; 3] = ["date", "first_or_second", "result"];

/// One match record as it appears in the results table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    pub date: String,
    pub first_or_second: String,
    pub result: String,
}

impl Row {
    pub fn new(
        date: impl Into<String>,
        first_or_second: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            first_or_second: first_or_second.into(),
            result: result.into(),
        }
    }

    /// Fields in column order.
    pub fn fields(&self) -> [&str; 3] {
        [&self.date, &self.first_or_second, &self.result]
    }

    pub fn header() -> Vec<String> {
        HEADER.iter().map(|h| s!(*h)).collect()
    }
}

pub type PageResult = Vec<Row>;

/// Run-wide ordered rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AggregateResult {
    rows: Vec<Row>,
}

impl AggregateResult {
    /// Concatenate pages, keeping page order and in-page order.
    pub fn from_pages<I>(pages: I) -> Self
    where
        I: IntoIterator<Item = PageResult>,
    {
        let mut rows = Vec::new();
        for mut page in pages {
            rows.append(&mut page);
        }
        Self { rows }
    }

    pub fn push_page(&mut self, mut page: PageResult) {
        self.rows.append(&mut page);
    }

    #[inline] pub fn len(&self) -> usize { self.rows.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    #[inline] pub fn rows(&self) -> &[Row] { &self.rows }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a AggregateResult {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
