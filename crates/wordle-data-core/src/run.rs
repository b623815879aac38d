//! One full fetch-and-write run
//!
//! Fetches the solution, then the guess list, writing each file only when
//! the corresponding fetch produced data. The two steps are independent.

use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::error::Result;
use crate::fetcher::WordleFetcher;
use crate::output::{write_answer, write_valid_guesses};
use crate::types::RunReport;

/// Fetches both data sets and writes them into `out_dir`
///
/// A failed fetch leaves its file untouched. Only write errors are returned.
///
/// # Arguments
/// * `fetcher` - Configured fetcher
/// * `out_dir` - Directory receiving `answer.txt` and `valid_guesses.txt`
/// * `date` - Date of the puzzle whose solution is fetched
///
/// # Errors
/// Returns `Io` if an output file cannot be written
pub async fn run(fetcher: &WordleFetcher, out_dir: &Path, date: NaiveDate) -> Result<RunReport> {
    let mut report = RunReport::default();

    if let Some(answer) = fetcher.fetch_solution(date).await {
        report.answer_path = Some(write_answer(out_dir, &answer)?);
    }

    if let Some(words) = fetcher.fetch_valid_guesses().await
        && !words.is_empty()
    {
        report.guesses_path = Some(write_valid_guesses(out_dir, &words)?);
        report.guess_count = words.len();
    }

    info!(
        answer = report.answer_path.is_some(),
        guesses = report.guess_count,
        "Run finished"
    );
    Ok(report)
}
