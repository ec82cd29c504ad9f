//! Scrape Czech parliamentary election results (volby.cz) of one district
//! into a CSV file, one row per municipality.

pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod municipality;
pub mod pipeline;
pub mod results;

pub use error::ScrapeError;
