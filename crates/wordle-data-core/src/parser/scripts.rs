//! Script reference parser for the landing page
//!
//! Extracts the JavaScript bundles a page loads, so the word-list search
//! can walk them in document order.

use scraper::{Html, Selector};

use crate::error::{Result, WordleError};

/// Parses landing-page HTML and returns every `src` value pointing at a `.js` file
///
/// Any element carrying a `src` attribute is considered, not just `<script>`,
/// so preloaded bundles are found too. Query strings and fragments are
/// ignored when checking the extension. Duplicates are kept in document
/// order; the caller stops at the first script that yields a match.
///
/// # Arguments
/// * `html` - Raw HTML string of the landing page
///
/// # Returns
/// Raw `src` values (unresolved), empty if the page references no scripts
///
/// # Errors
/// Returns `ParseError` if the selector cannot be built
pub fn parse_script_sources(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("[src]")
        .map_err(|e| WordleError::ParseError(format!("Invalid selector: {:?}", e)))?;

    let sources = document
        .select(&selector)
        .filter_map(|element| element.value().attr("src"))
        .map(str::trim)
        .filter(|src| is_javascript_path(src))
        .map(str::to_string)
        .collect();

    Ok(sources)
}

/// Checks whether a `src` value names a JavaScript file
fn is_javascript_path(src: &str) -> bool {
    let path = src.split(['?', '#']).next().unwrap_or(src);
    path.len() > ".js".len() && path.ends_with(".js")
}
