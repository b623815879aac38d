//! Command-line arguments for `wordle-data`

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "wordle-data",
    about = "Fetch today's Wordle answer and the valid-guess list into answer.txt and valid_guesses.txt",
    version
)]
pub struct Cli {
    /// Directory the output files are written to.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Puzzle date (YYYY-MM-DD). Defaults to today in local time.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Date whose solution should be fetched
    pub fn puzzle_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
