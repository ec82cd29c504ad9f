// src/export.rs

use std::fs::OpenOptions;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, ScrapeError};

/// Append one row to `path`, writing `header` first if the file is new or empty.
pub fn append_row(header: &[String], row: &[String], path: &Path) -> Result<()> {
    append_rows(header, &[row.to_vec()], path)
}

/// Append `rows` to `path` with the same header-once rule as [`append_row`].
///
/// The file is opened, flushed and closed within the call, so rows written by
/// earlier calls survive a failure later in the run.
pub fn append_rows(header: &[String], rows: &[Vec<String>], path: &Path) -> Result<()> {
    let csv_err = |source: csv::Error| ScrapeError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let needs_header = file.metadata()?.len() == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(file);
    if needs_header {
        debug!(path = %path.display(), "writing header");
        writer.write_record(header).map_err(csv_err)?;
    }
    for row in rows {
        writer.write_record(row).map_err(csv_err)?;
    }
    writer.flush()?;
    Ok(())
}
