//! Core data types for the Wordle fetchers

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Daily puzzle document served by the solution endpoint
///
/// A missing `solution` deserializes to an empty string so the fetcher can
/// report it as a missing field. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// The day's target word (e.g., "crane")
    #[serde(default)]
    pub solution: String,

    /// Internal puzzle ID
    #[serde(default)]
    pub id: Option<u64>,

    /// Publication date in ISO format (e.g., "2024-03-09")
    #[serde(default)]
    pub print_date: Option<String>,

    /// Puzzle number counted from launch
    #[serde(default)]
    pub days_since_launch: Option<u64>,

    /// Puzzle editor's name
    #[serde(default)]
    pub editor: Option<String>,
}

/// Outcome of one orchestrated run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Path of `answer.txt` if it was written
    pub answer_path: Option<PathBuf>,

    /// Path of `valid_guesses.txt` if it was written
    pub guesses_path: Option<PathBuf>,

    /// Number of words written to `valid_guesses.txt`
    pub guess_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_puzzle_full_document() {
        let json = r#"{
            "id": 1234,
            "solution": "crane",
            "print_date": "2024-03-09",
            "days_since_launch": 994,
            "editor": "Tracy Bennett"
        }"#;
        let puzzle: Puzzle = serde_json::from_str(json).expect("Deserialization should succeed");
        assert_eq!(puzzle.solution, "crane");
        assert_eq!(puzzle.id, Some(1234));
        assert_eq!(puzzle.print_date.as_deref(), Some("2024-03-09"));
        assert_eq!(puzzle.days_since_launch, Some(994));
    }

    #[test]
    fn test_puzzle_solution_only() {
        let puzzle: Puzzle =
            serde_json::from_str(r#"{"solution": "crane"}"#).expect("Deserialization should succeed");
        assert_eq!(puzzle.solution, "crane");
        assert_eq!(puzzle.id, None);
        assert_eq!(puzzle.editor, None);
    }

    #[test]
    fn test_puzzle_ignores_unknown_fields() {
        let puzzle: Puzzle = serde_json::from_str(r#"{"solution": "slate", "status": "OK"}"#)
            .expect("Deserialization should succeed");
        assert_eq!(puzzle.solution, "slate");
    }

    #[test]
    fn test_puzzle_missing_solution() {
        let puzzle: Puzzle = serde_json::from_str(r#"{"id": 1, "print_date": "2024-03-09"}"#)
            .expect("Deserialization should succeed");
        assert!(puzzle.solution.is_empty());
    }

    #[test]
    fn test_run_report_default_is_empty() {
        let report = RunReport::default();
        assert!(report.answer_path.is_none());
        assert!(report.guesses_path.is_none());
        assert_eq!(report.guess_count, 0);
    }
}
