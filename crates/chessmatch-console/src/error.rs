//! Console front-end errors.

use chessmatch_rules::MatchError;

/// Errors that can occur while driving a match from text input.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// A line that is neither a command nor a board coordinate.
    #[error("invalid square: \"{input}\" (expected a coordinate such as e2)")]
    InvalidSquare {
        /// The rejected input, trimmed.
        input: String,
    },

    /// The rules engine reported an error that play cannot recover from.
    #[error("rules engine failure: {source}")]
    Match {
        /// The underlying rule error.
        #[from]
        source: MatchError,
    },

    /// Reading input or writing output failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
