// src/file.rs

use std::{
    fs,
    path::Path,
};

use crate::csv::to_csv_string;
use crate::data::AggregateResult;
use crate::error::ScrapeError;

/// Write header + rows to `path`, replacing any existing file.
/// Missing parent directories are created first.
pub fn write_results(
    path: &Path,
    header: &[String],
    rows: &AggregateResult,
) -> Result<(), ScrapeError> {
    let io_err = |source| ScrapeError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(io_err)?;
        }
    }

    let contents = to_csv_string(header, rows);
    fs::write(path, contents).map_err(io_err)?;
    log::debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
