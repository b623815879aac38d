//! URL helper functions for the Wordle endpoints
//!
//! Provides the default endpoint locations, the date-keyed solution URL and
//! resolution of script `src` attributes against the landing page.

use chrono::NaiveDate;
use reqwest::Url;

use crate::error::{Result, WordleError};

/// Site root used by the solution endpoint
pub const BASE_URL: &str = "https://www.nytimes.com";

/// Landing page that references the game's script bundles
pub const LANDING_PAGE_URL: &str = "https://www.nytimes.com/games/wordle/index.html";

/// Builds the solution JSON URL for a given date
///
/// # Arguments
/// * `base` - Site root without trailing slash (e.g., [`BASE_URL`])
/// * `date` - Puzzle date, rendered in ISO format
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use wordle_data_core::url::build_solution_url;
/// let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// let url = build_solution_url("https://www.nytimes.com", date);
/// assert_eq!(url, "https://www.nytimes.com/svc/wordle/v2/2024-03-09.json");
/// ```
pub fn build_solution_url(base: &str, date: NaiveDate) -> String {
    format!(
        "{}/svc/wordle/v2/{}.json",
        base.trim_end_matches('/'),
        date.format("%Y-%m-%d")
    )
}

/// Resolves a script `src` attribute against the page it was found on
///
/// Absolute URLs are returned unchanged; relative, root-relative and
/// protocol-relative paths are joined onto `page_url`.
///
/// # Errors
/// Returns `InvalidUrl` if either the page URL or the joined result is invalid
///
/// # Example
/// ```
/// use wordle_data_core::url::resolve_script_url;
/// let url = resolve_script_url(
///     "https://www.nytimes.com/games/wordle/index.html",
///     "main.abc123.js",
/// ).unwrap();
/// assert_eq!(url, "https://www.nytimes.com/games/wordle/main.abc123.js");
/// ```
pub fn resolve_script_url(page_url: &str, src: &str) -> Result<String> {
    let base = Url::parse(page_url)
        .map_err(|e| WordleError::InvalidUrl(format!("{}: {}", page_url, e)))?;
    let resolved = base
        .join(src.trim())
        .map_err(|e| WordleError::InvalidUrl(format!("{}: {}", src, e)))?;
    Ok(resolved.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://www.nytimes.com/games/wordle/index.html";

    #[test]
    fn test_build_solution_url() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let url = build_solution_url(BASE_URL, date);
        assert_eq!(url, "https://www.nytimes.com/svc/wordle/v2/2025-12-31.json");
    }

    #[test]
    fn test_build_solution_url_pads_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2022, 1, 5).unwrap();
        let url = build_solution_url("http://127.0.0.1:8080/", date);
        assert_eq!(url, "http://127.0.0.1:8080/svc/wordle/v2/2022-01-05.json");
    }

    #[test]
    fn test_resolve_script_url_relative() {
        let url = resolve_script_url(PAGE, "wordle.bundle.js").unwrap();
        assert_eq!(url, "https://www.nytimes.com/games/wordle/wordle.bundle.js");
    }

    #[test]
    fn test_resolve_script_url_root_relative() {
        let url = resolve_script_url(PAGE, "/games-assets/v2/wordle.js").unwrap();
        assert_eq!(url, "https://www.nytimes.com/games-assets/v2/wordle.js");
    }

    #[test]
    fn test_resolve_script_url_absolute() {
        let url = resolve_script_url(PAGE, "https://cdn.example.com/a.js").unwrap();
        assert_eq!(url, "https://cdn.example.com/a.js");
    }

    #[test]
    fn test_resolve_script_url_protocol_relative() {
        let url = resolve_script_url(PAGE, "//static01.nyt.com/x.js").unwrap();
        assert_eq!(url, "https://static01.nyt.com/x.js");
    }

    #[test]
    fn test_resolve_script_url_invalid_page() {
        let result = resolve_script_url("not a url", "a.js");
        assert!(matches!(result, Err(WordleError::InvalidUrl(_))));
    }
}
