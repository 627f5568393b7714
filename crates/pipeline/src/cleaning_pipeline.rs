//! The CleaningPipeline chains cleanup steps together.
//!
//! This module provides the CleaningPipeline struct that turns one raw line
//! of generated text into a `MovieTitle` using the builder pattern.

use crate::cleaners::{StripMarker, TruncateAnnotation, TruncateParenthetical};
use crate::traits::Cleaner;
use movie_types::MovieTitle;

/// Chains multiple cleaners together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = CleaningPipeline::new()
///     .add_cleaner(StripMarker::default())
///     .add_cleaner(TruncateParenthetical)
///     .add_cleaner(TruncateAnnotation);
///
/// let title = pipeline.clean("1. Looper (2012)");
/// ```
pub struct CleaningPipeline {
    cleaners: Vec<Box<dyn Cleaner>>,
}

impl CleaningPipeline {
    /// Create a new empty CleaningPipeline.
    pub fn new() -> Self {
        Self {
            cleaners: Vec::new(),
        }
    }

    /// The pipeline used for generated recommendation lists:
    /// marker, then parenthetical, then dash annotation.
    pub fn standard() -> Self {
        Self::new()
            .add_cleaner(StripMarker::default())
            .add_cleaner(TruncateParenthetical)
            .add_cleaner(TruncateAnnotation)
    }

    /// Add a cleaner to the pipeline (builder pattern).
    pub fn add_cleaner(mut self, cleaner: impl Cleaner + 'static) -> Self {
        self.cleaners.push(Box::new(cleaner));
        self
    }

    /// Apply all cleaners in sequence to one line.
    ///
    /// Returns `None` when nothing is left of the line.
    pub fn clean(&self, line: &str) -> Option<MovieTitle> {
        let mut current = line.trim();
        for cleaner in &self.cleaners {
            let next = cleaner.clean(current);
            if next != current {
                tracing::trace!("{}: {:?} -> {:?}", cleaner.name(), current, next);
            }
            current = next;
        }
        MovieTitle::new(current).ok()
    }
}

impl Default for CleaningPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pipeline() {
        let pipeline = CleaningPipeline::new();

        let title = pipeline.clean("  1. Looper (2012)  ").unwrap();
        assert_eq!(title.as_str(), "1. Looper (2012)");
    }

    #[test]
    fn test_single_cleaner() {
        let pipeline = CleaningPipeline::new().add_cleaner(TruncateParenthetical);

        let title = pipeline.clean("1. Looper (2012)").unwrap();
        assert_eq!(title.as_str(), "1. Looper");
    }

    #[test]
    fn test_standard_pipeline() {
        let pipeline = CleaningPipeline::standard();

        assert_eq!(pipeline.clean("1. Looper (2012)").unwrap().as_str(), "Looper");
        assert_eq!(
            pipeline.clean("2. Primer (2004) - a cult favourite").unwrap().as_str(),
            "Primer"
        );
        assert_eq!(
            pipeline.clean("- Back to the Future - the original").unwrap().as_str(),
            "Back to the Future"
        );
    }

    #[test]
    fn test_line_that_cleans_to_nothing() {
        let pipeline = CleaningPipeline::standard();

        assert!(pipeline.clean("3. (1995)").is_none());
        assert!(pipeline.clean("- ").is_none());
        assert!(pipeline.clean("").is_none());
    }

    #[test]
    fn test_cleaning_is_idempotent_on_clean_titles() {
        let pipeline = CleaningPipeline::standard();

        for raw in ["1. Looper (2012)", "• 12 Monkeys", "* Donnie Darko - cult"] {
            let once = pipeline.clean(raw).unwrap();
            let twice = pipeline.clean(once.as_str()).unwrap();
            assert_eq!(once, twice);
        }
    }
}
