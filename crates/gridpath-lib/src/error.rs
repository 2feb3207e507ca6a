use std::path::PathBuf;

use thiserror::Error;

use crate::map::Point;

/// Convenient result alias for the gridpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the open set empties without reaching the goal.
    #[error("could not find a path between nodes '{start}' and '{goal}'")]
    PathNotFound { start: Point, goal: Point },

    /// Raised when an algorithm selector does not name a known pathfinder.
    #[error("unknown pathfinding algorithm: {value}{}", format_suggestions(.suggestions))]
    InvalidAlgorithm {
        value: String,
        suggestions: Vec<String>,
    },

    /// Raised when map text does not match the expected grid format.
    #[error("map line {line} is malformed: {reason}")]
    MapFormat { line: usize, reason: String },

    /// Raised when a start or end identifier appears more than once.
    #[error("found multiple of the identifier '{identifier}' in the given map")]
    DuplicateMapIdentifier { identifier: char },

    /// Raised when a start or end identifier is missing from the map.
    #[error("could not find identifier '{identifier}' in the given map")]
    IdentifierNotFound { identifier: char },

    /// Raised when a settings file lacks the top-level `Settings` section.
    #[error("settings file {path} has no 'Settings' section")]
    MissingSettingsSection { path: PathBuf },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
