// src/error.rs

use std::io::{self, Write};
use std::num::ParseIntError;
use std::path::PathBuf;

/// Every way a scrape run can fail. None of these are retried; the driver
/// reports them and stops.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("invalid url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("could not build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("GET {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("no municipality number cells found on the listing page")]
    NoMunicipalityCells,

    #[error("municipality `{0}` has no detail link")]
    MissingLink(String),

    #[error("municipality {0} has no name cell in its row")]
    MissingName(u32),

    #[error("cannot parse municipality code `{text}`: {source}")]
    InvalidCode {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("municipality list is empty, nothing to build the header from")]
    NoMunicipalities,

    #[error("row for municipality {code} has {got} fields, header has {expected}")]
    RowShape {
        code: u32,
        got: usize,
        expected: usize,
    },

    #[error("writing {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    /// Operator-facing advice for the failure category.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } | Self::Client(_) | Self::Http { .. } | Self::Status { .. } => {
                "There is a problem with the url, please check the url and internet connection and run again."
            }
            Self::NoMunicipalityCells | Self::MissingLink(_) | Self::MissingName(_) => {
                "Cannot get municipality links, probably due to a wrong url at volby.cz."
            }
            Self::InvalidCode { .. } | Self::RowShape { .. } | Self::Selector { .. } => {
                "Cannot read the municipality data, probably due to changes of the volby.cz website or a wrong url."
            }
            Self::NoMunicipalities => {
                "Cannot get the list of municipalities, probably due to a wrong url or the volby.cz website has changed."
            }
            Self::Csv { .. } | Self::Io(_) => "Cannot write the output file.",
        }
    }

    /// Print the error once, followed by its hint.
    pub fn report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Error: {}", self)?;
        writeln!(out, "{}", self.hint())
    }
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
