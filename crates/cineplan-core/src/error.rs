//! Error types for building a festival problem.

use thiserror::Error;

/// Malformed or truncated input token stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token stream ended before the named item was read.
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    /// A count could not be parsed as a number.
    #[error("invalid {expected}: '{token}' is not a number")]
    InvalidNumber {
        token: String,
        expected: &'static str,
    },

    /// A count was negative.
    #[error("{expected} must not be negative, got {value}")]
    NegativeCount { value: i64, expected: &'static str },
}

/// Main error type for model construction.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Failure reading the input source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or truncated input.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A restriction pair names a title absent from the film list.
    #[error("restriction references unknown film '{title}'")]
    UnknownFilm { title: String },

    /// Packing is impossible without at least one cinema.
    #[error("cinema count must be positive, got {cinemas}")]
    Capacity { cinemas: i64 },

    /// Two films share a title, making restriction pairs ambiguous.
    #[error("film '{title}' is listed more than once")]
    DuplicateFilm { title: String },

    /// A film cannot be restricted against itself.
    #[error("film '{title}' is restricted against itself")]
    SelfRestriction { title: String },
}

/// Result type alias for model construction.
pub type Result<T> = std::result::Result<T, ModelError>;
