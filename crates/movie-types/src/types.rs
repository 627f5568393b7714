//! Core domain types shared by every crate in the workspace.
//!
//! The records produced here are what the HTTP API serializes, so field
//! names follow the wire format (`poster_url`, `imdb_rating`, ...).

use crate::error::{Result, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Constants
// =============================================================================

/// Placeholder used when a metadata field is unavailable
pub const NOT_AVAILABLE: &str = "N/A";

/// Plot text used for records whose lookup failed entirely
pub const DETAILS_NOT_AVAILABLE: &str = "Details not available";

/// Upper bound on the number of titles extracted per request
pub const MAX_TITLES: usize = 5;

// =============================================================================
// Request
// =============================================================================

/// Free-form text describing what the user wants to watch.
///
/// The text is trimmed on construction and can never be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    text: String,
}

impl RecommendationRequest {
    /// Validate and wrap user input.
    ///
    /// Returns `ValidationError::EmptyInput` for empty or whitespace-only text.
    pub fn new(text: impl AsRef<str>) -> Result<Self> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        Ok(Self {
            text: text.to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

// =============================================================================
// Titles
// =============================================================================

/// A cleaned, non-empty movie title extracted from generated text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieTitle(String);

impl MovieTitle {
    /// Wrap a title, trimming surrounding whitespace.
    pub fn new(title: impl AsRef<str>) -> Result<Self> {
        let title = title.as_ref().trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(Self(title.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MovieTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MovieTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Records
// =============================================================================

/// Metadata for a single recommended movie.
///
/// Every field except the poster holds either real data or `NOT_AVAILABLE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub year: String,
    pub genre: String,
    pub director: String,
    pub actors: String,
    pub plot: String,
    pub poster_url: Option<String>,
    pub imdb_rating: String,
    pub runtime: String,
    pub language: String,
    pub country: String,
}

impl MovieRecord {
    /// Record used in place of a failed lookup.
    ///
    /// Keeps the extracted title so the position is still identifiable.
    pub fn placeholder(title: &MovieTitle) -> Self {
        let na = || NOT_AVAILABLE.to_string();
        Self {
            title: title.as_str().to_string(),
            year: na(),
            genre: na(),
            director: na(),
            actors: na(),
            plot: DETAILS_NOT_AVAILABLE.to_string(),
            poster_url: None,
            imdb_rating: na(),
            runtime: na(),
            language: na(),
            country: na(),
        }
    }

    /// True when this record came from `placeholder` rather than a lookup
    pub fn is_placeholder(&self) -> bool {
        self.plot == DETAILS_NOT_AVAILABLE && self.year == NOT_AVAILABLE
    }
}

// =============================================================================
// Result
// =============================================================================

/// Aggregated response for one recommendation request.
///
/// `movie_names`, `poster_urls` and `movie_details` are parallel lists.
/// When `error` is set all three are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub user_input: String,
    pub movie_names: Vec<String>,
    pub poster_urls: Vec<Option<String>>,
    pub movie_details: Vec<MovieRecord>,
    pub error: Option<String>,
}

impl RecommendationResult {
    /// Build a successful result from looked-up records, keeping their order.
    ///
    /// At most `MAX_TITLES` records are kept.
    pub fn from_records(user_input: impl Into<String>, records: Vec<MovieRecord>) -> Self {
        let mut records = records;
        records.truncate(MAX_TITLES);

        let movie_names = records.iter().map(|r| r.title.clone()).collect();
        let poster_urls = records.iter().map(|r| r.poster_url.clone()).collect();

        Self {
            user_input: user_input.into(),
            movie_names,
            poster_urls,
            movie_details: records,
            error: None,
        }
    }

    /// Build a failed result carrying only the input and an error message.
    pub fn failed(user_input: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            user_input: user_input.into(),
            movie_names: Vec::new(),
            poster_urls: Vec::new(),
            movie_details: Vec::new(),
            error: Some(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn len(&self) -> usize {
        self.movie_details.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movie_details.is_empty()
    }
}
