// src/pipeline.rs

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::config::{Config, WriteMode};
use crate::error::{Result, ScrapeError};
use crate::export::{append_row, append_rows};
use crate::fetch::{PageSource, RunContext};
use crate::municipality::list_municipalities;
use crate::results::{assemble_row, build_header, build_record};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub rows_written: usize,
}

/// Scrape one district into `config.output`.
///
/// Nothing touches the output file until the listing page has been fetched,
/// every municipality parsed and the header built.
#[instrument(level = "info", skip_all, fields(url = %config.url))]
pub fn run<S: PageSource>(source: &S, config: &Config) -> Result<RunSummary> {
    let ctx = RunContext::new(&config.url)?;
    let listing = source.fetch(ctx.base())?;
    let municipalities = list_municipalities(&listing)?;

    let first = municipalities.first().ok_or(ScrapeError::NoMunicipalities)?;
    let header = build_header(source, &ctx, &first.link)?;

    let mut buffered = Vec::new();
    for m in &municipalities {
        info!(code = m.code, "Getting data for... {}", m.name);
        let record = build_record(source, &ctx, &m.link)?;
        let row = assemble_row(m, record);
        if row.len() != header.len() {
            return Err(ScrapeError::RowShape {
                code: m.code,
                got: row.len(),
                expected: header.len(),
            });
        }
        match config.write_mode {
            WriteMode::Incremental => append_row(&header, &row, &config.output)?,
            WriteMode::Buffered => buffered.push(row),
        }
    }
    if config.write_mode == WriteMode::Buffered {
        append_rows(&header, &buffered, &config.output)?;
    }

    info!(rows = municipalities.len(), output = %config.output.display(), "done");
    Ok(RunSummary {
        output: config.output.clone(),
        rows_written: municipalities.len(),
    })
}
