// src/progress.rs
/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of URLs.
    fn begin(&mut self, _total: usize) {}

    /// A fetch for `url` (position `index` in the list) is starting.
    fn fetching(&mut self, _index: usize, _url: &str) {}

    /// Page `index` was fetched and parsed into `rows` rows.
    fn item_done(&mut self, _index: usize, _rows: usize) {}

    /// Free-form status line for human eyes (e.g. where the output went).
    fn log(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
