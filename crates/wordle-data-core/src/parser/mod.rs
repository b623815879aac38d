//! Parsers for the Wordle site's HTML and script assets
//!
//! Contains modules for the landing page and for script bundles.

pub mod scripts;
pub mod word_list;

pub use scripts::parse_script_sources;
pub use word_list::{MIN_WORD_COUNT, SENTINEL_WORD, extract_valid_guesses, find_word_arrays};
