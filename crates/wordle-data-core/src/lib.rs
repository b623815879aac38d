//! Wordle Data Core Library
//!
//! Fetches the daily Wordle solution and the valid-guess vocabulary from
//! nytimes.com and writes them to flat files.
//!
//! # Overview
//!
//! - HTTP client configured once with a user agent and a 5 second timeout
//! - Solution fetch from the date-keyed JSON endpoint
//! - Guess-list discovery inside the game's script bundles
//! - Writers for `answer.txt` and `valid_guesses.txt`
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use wordle_data_core::{WordleFetcher, Result, run};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let fetcher = WordleFetcher::new()?;
//!     let today = chrono::Local::now().date_naive();
//!
//!     let report = run(&fetcher, Path::new("."), today).await?;
//!     println!("{} valid guesses written", report.guess_count);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Fragility
//!
//! The guess list is not published through any API. It is located by
//! scanning every script the landing page loads for an array of at least
//! [`MIN_WORD_COUNT`] five-letter words containing [`SENTINEL_WORD`]. A
//! change in the site's bundling makes the fetch return `None`.

mod client;
mod error;
mod fetcher;
pub mod output;
pub mod parser;
mod run;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, WordleClient};

// Re-export error types
pub use error::{Result, WordleError};

// Re-export the fetch API
pub use fetcher::{FetchConfig, WordleFetcher};

// Re-export parser functions and heuristics
pub use parser::{MIN_WORD_COUNT, SENTINEL_WORD, extract_valid_guesses, parse_script_sources};

// Re-export output writers
pub use output::{ANSWER_FILE, VALID_GUESSES_FILE, write_answer, write_valid_guesses};

pub use run::run;

// Re-export data types
pub use types::{Puzzle, RunReport};

// Re-export URL helper functions for convenience
pub use url::{build_solution_url, resolve_script_url};
