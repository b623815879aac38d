//! wordle-data: writes answer.txt and valid_guesses.txt.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wordle_data_core::{WordleFetcher, run};

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let date = cli.puzzle_date();
    info!(%date, out_dir = %cli.out_dir.display(), "Fetching Wordle data");

    let fetcher = WordleFetcher::new().context("failed to build HTTP client")?;
    let report = run(&fetcher, &cli.out_dir, date)
        .await
        .context("failed to write output")?;

    if report.answer_path.is_none() {
        info!("answer.txt not updated");
    }
    if report.guesses_path.is_none() {
        info!("valid_guesses.txt not updated");
    }

    Ok(())
}
