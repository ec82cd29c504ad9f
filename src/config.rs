// src/config.rs

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const SAMPLE_URL: &str = "https://volby.cz/pls/ps2017nss/ps32?xjazyk=CZ&xkraj=2&xnumnuts=2111";

const DEFAULT_USER_AGENT: &str = concat!("volbyscraper/", env!("CARGO_PKG_VERSION"));

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Scrape Czech parliamentary election results of one district into a CSV file"
)]
pub struct Args {
    /// URL of the page listing the municipalities of a district
    pub url: Option<String>,
    /// Output file name; `.csv` is appended
    pub output: Option<String>,
    /// Per-request timeout in seconds
    #[arg(
        long,
        env = "VOLBY_TIMEOUT_SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,
    #[arg(long, env = "VOLBY_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
    /// Write all rows once every municipality has been scraped
    #[arg(long)]
    pub buffered: bool,
}

/// When rows reach the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Append each row as soon as its municipality is scraped.
    #[default]
    Incremental,
    /// Collect every row first and append them in one go.
    Buffered,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub output: PathBuf,
    pub timeout: Duration,
    pub user_agent: String,
    pub write_mode: WriteMode,
}

impl Config {
    /// Build the run configuration, asking on `input` for whatever `args` lacks.
    pub fn from_args<R: BufRead, W: Write>(args: Args, input: &mut R, out: &mut W) -> io::Result<Self> {
        let url = match args.url {
            Some(url) => url,
            None => {
                writeln!(out, "Sample URL: {}", SAMPLE_URL)?;
                prompt(input, out, "Please insert the url with list of the municipalities: ")?
            }
        };
        let name = match args.output {
            Some(name) => name,
            None => prompt(input, out, "Insert the name of the file: ")?,
        };

        Ok(Self {
            url,
            output: output_path(&name),
            timeout: Duration::from_secs(args.timeout_secs),
            user_agent: args.user_agent,
            write_mode: if args.buffered {
                WriteMode::Buffered
            } else {
                WriteMode::Incremental
            },
        })
    }
}

pub fn output_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{}.csv", name))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> io::Result<String> {
    write!(out, "{}", question)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no answer on stdin"));
    }
    Ok(line.trim().to_string())
}
