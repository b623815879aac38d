//! High-level fetch API for the Wordle data
//!
//! Combines the HTTP client with the parsers. Each operation comes in two
//! flavours: `try_*` returns the typed error, the plain variant logs the
//! cause and collapses any failure to `None`.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::client::{ClientConfig, WordleClient};
use crate::error::{Result, WordleError};
use crate::parser::{extract_valid_guesses, parse_script_sources};
use crate::types::Puzzle;
use crate::url::{BASE_URL, LANDING_PAGE_URL, build_solution_url, resolve_script_url};

/// Endpoint locations used by [`WordleFetcher`]
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Site root for the solution endpoint (default: [`BASE_URL`])
    pub base_url: String,
    /// Page whose scripts are searched for the word list (default: [`LANDING_PAGE_URL`])
    pub landing_page_url: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            landing_page_url: LANDING_PAGE_URL.to_string(),
        }
    }
}

/// Fetches the daily solution and the valid-guess vocabulary
pub struct WordleFetcher {
    client: WordleClient,
    config: FetchConfig,
}

impl WordleFetcher {
    /// Create a new fetcher against the live site with default client settings
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default(), FetchConfig::default())
    }

    /// Create a new fetcher with custom client and endpoint configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(client_config: ClientConfig, config: FetchConfig) -> Result<Self> {
        let client = WordleClient::with_config(client_config)?;
        Ok(Self { client, config })
    }

    /// Fetch the puzzle solution for `date`, or `None` on any failure
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> wordle_data_core::Result<()> {
    /// use wordle_data_core::WordleFetcher;
    /// let fetcher = WordleFetcher::new()?;
    /// let today = chrono::Local::now().date_naive();
    /// if let Some(word) = fetcher.fetch_solution(today).await {
    ///     println!("Today's answer: {}", word);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_solution(&self, date: NaiveDate) -> Option<String> {
        match self.try_fetch_solution(date).await {
            Ok(solution) => Some(solution),
            Err(e) => {
                warn!(%date, error = %e, "Could not fetch solution");
                None
            }
        }
    }

    /// Fetch the puzzle solution for `date`
    ///
    /// # Errors
    /// - `HttpError` / `HttpStatus` if the request fails
    /// - `JsonError` if the body is not a puzzle document
    /// - `MissingField` if `solution` is absent or empty
    pub async fn try_fetch_solution(&self, date: NaiveDate) -> Result<String> {
        let url = build_solution_url(&self.config.base_url, date);
        let puzzle: Puzzle = self.client.fetch_json(&url).await?;

        let solution = puzzle.solution.trim();
        if solution.is_empty() {
            return Err(WordleError::MissingField("solution".to_string()));
        }

        info!(
            %date,
            puzzle = ?puzzle.days_since_launch,
            editor = puzzle.editor.as_deref().unwrap_or("unknown"),
            "Fetched solution"
        );
        Ok(solution.to_string())
    }

    /// Fetch the valid-guess vocabulary, or `None` on any failure
    pub async fn fetch_valid_guesses(&self) -> Option<Vec<String>> {
        match self.try_fetch_valid_guesses().await {
            Ok(words) => Some(words),
            Err(e) => {
                warn!(error = %e, "Could not fetch valid guesses");
                None
            }
        }
    }

    /// Fetch the valid-guess vocabulary
    ///
    /// Walks the landing page's scripts in document order and returns the
    /// first word list found. Scripts answering with a non-success status
    /// are skipped; any other failure aborts the search.
    ///
    /// # Errors
    /// - `NotFound` if the page references no scripts or none holds the list
    /// - `HttpError` / `HttpStatus` if a request fails
    /// - `InvalidUrl` if a script reference cannot be resolved
    /// - `JsonError` if a candidate array fails to parse
    pub async fn try_fetch_valid_guesses(&self) -> Result<Vec<String>> {
        let page_url = &self.config.landing_page_url;
        let html = self.client.fetch_text(page_url).await?;

        let sources = parse_script_sources(&html)?;
        if sources.is_empty() {
            return Err(WordleError::NotFound(format!(
                "no script references on {}",
                page_url
            )));
        }
        debug!(count = sources.len(), "Found script references");

        for src in &sources {
            let script_url = resolve_script_url(page_url, src)?;
            let js = match self.client.fetch_text(&script_url).await {
                Ok(body) => body,
                Err(e) if e.is_status() => {
                    debug!(error = %e, "Skipping script");
                    continue;
                }
                Err(e) => return Err(e),
            };

            if let Some(words) = extract_valid_guesses(&js)? {
                info!(url = %script_url, count = words.len(), "Found valid-guess list");
                return Ok(words);
            }
        }

        Err(WordleError::NotFound(format!(
            "word list in any of {} scripts",
            sources.len()
        )))
    }
}
