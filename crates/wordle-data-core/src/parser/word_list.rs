//! Word-list extraction from minified script bundles
//!
//! The game ships its guess vocabulary as a plain array literal inside one
//! of its bundles. Smaller five-letter arrays (the solution list, test
//! fixtures) live alongside it, so candidates are filtered by size and then
//! confirmed by a sentinel word.

use regex::Regex;
use tracing::debug;

use crate::error::{Result, WordleError};

/// Smallest array that can be the guess vocabulary
pub const MIN_WORD_COUNT: usize = 5001;

/// Word only present in the guess vocabulary
pub const SENTINEL_WORD: &str = "aahed";

/// Byte length of one `"xxxxx"` element plus its separating comma
const ELEMENT_STRIDE: usize = 8;

/// Finds every array literal made only of five-letter lowercase word strings
/// with at least `min_count` elements
///
/// Literals must be compact (`["abcde","fghij"]`), which is how minified
/// bundles emit them.
///
/// # Returns
/// Matched literal slices in source order
pub fn find_word_arrays(js: &str, min_count: usize) -> Result<Vec<&str>> {
    let re = Regex::new(r#"\["[a-z]{5}"(?:,"[a-z]{5}")*\]"#)
        .map_err(|e| WordleError::ParseError(format!("Invalid regex: {}", e)))?;

    Ok(re
        .find_iter(js)
        .map(|m| m.as_str())
        .filter(|literal| element_count(literal) >= min_count)
        .collect())
}

/// Number of elements in a compact five-letter array literal
///
/// A literal of `n` elements is `8n + 1` bytes long.
fn element_count(literal: &str) -> usize {
    literal.len().saturating_sub(1) / ELEMENT_STRIDE
}

/// Searches a script body for the guess vocabulary
///
/// Every candidate from [`find_word_arrays`] is parsed as JSON; the first
/// one containing [`SENTINEL_WORD`] wins and is returned in source order.
///
/// # Returns
/// `Some(words)` if a qualifying array contains the sentinel, `None` otherwise
///
/// # Errors
/// Returns `JsonError` if a candidate fails to parse
pub fn extract_valid_guesses(js: &str) -> Result<Option<Vec<String>>> {
    for literal in find_word_arrays(js, MIN_WORD_COUNT)? {
        let words: Vec<String> = serde_json::from_str(literal)?;
        if words.iter().any(|w| w == SENTINEL_WORD) {
            return Ok(Some(words));
        }
        debug!(len = words.len(), "Candidate array lacks sentinel word");
    }
    Ok(None)
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// Deterministic distinct five-letter word for an index (base 26, 'a'-padded)
    pub fn word(mut index: usize) -> String {
        let mut letters = [b'a'; 5];
        for slot in letters.iter_mut().rev() {
            *slot = b'a' + (index % 26) as u8;
            index /= 26;
        }
        String::from_utf8(letters.to_vec()).unwrap()
    }

    /// `count` distinct words; the sentinel "aahed" is index 4839
    pub fn words(count: usize) -> Vec<String> {
        (0..count).map(word).collect()
    }

    /// `count` distinct words that never include the sentinel
    pub fn words_without_sentinel(count: usize) -> Vec<String> {
        (0..)
            .map(word)
            .filter(|w| w != super::SENTINEL_WORD)
            .take(count)
            .collect()
    }

    /// Compact JSON array literal as emitted by a minifier
    pub fn literal(words: &[String]) -> String {
        serde_json::to_string(words).unwrap()
    }
}
