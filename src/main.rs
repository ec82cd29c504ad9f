use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use volbyscraper::{
    config::{Args, Config},
    fetch::HttpFetcher,
    pipeline,
};

fn main() -> Result<ExitCode> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    // ─── 2) resolve configuration ────────────────────────────────────
    let args = Args::parse();
    let config = Config::from_args(args, &mut io::stdin().lock(), &mut io::stdout())?;
    info!(url = %config.url, output = %config.output.display(), mode = ?config.write_mode, "startup");

    // ─── 3) scrape ───────────────────────────────────────────────────
    let fetcher = HttpFetcher::new(&config)?;
    match pipeline::run(&fetcher, &config) {
        Ok(summary) => {
            println!();
            println!("File {} was created.", summary.output.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            err.report(&mut io::stderr())?;
            Ok(ExitCode::FAILURE)
        }
    }
}
