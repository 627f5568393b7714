//! Error types for the movie-types crate.

use thiserror::Error;

/// Errors raised while validating caller-supplied values.
///
/// These are surfaced to the caller before any outbound request is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The request text was empty or whitespace only
    #[error("No input text provided")]
    EmptyInput,

    /// A movie title was empty after trimming
    #[error("Movie title must not be empty")]
    EmptyTitle,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ValidationError>;
