//! Line-level extraction of movie titles from generated text.
//!
//! ## Algorithm
//! 1. Split the text into lines and trim each one
//! 2. Skip blank lines
//! 3. Keep only list entries: lines starting with a digit, `•`, `-` or `*`
//! 4. Run each entry through the CleaningPipeline
//! 5. Drop entries that clean to nothing
//! 6. Keep the first `limit` titles, in order

use crate::cleaning_pipeline::CleaningPipeline;
use movie_types::{MAX_TITLES, MovieTitle};
use tracing::debug;

/// Returns true when a trimmed line looks like an entry of a list.
pub fn is_list_entry(line: &str) -> bool {
    match line.chars().next() {
        Some(c) => c.is_ascii_digit() || matches!(c, '•' | '-' | '*'),
        None => false,
    }
}

/// Extracts titles from generated text with a given pipeline and limit.
pub struct TitleExtractor {
    pipeline: CleaningPipeline,
    limit: usize,
}

impl TitleExtractor {
    /// Create an extractor using the standard pipeline and `MAX_TITLES`.
    pub fn new() -> Self {
        Self {
            pipeline: CleaningPipeline::standard(),
            limit: MAX_TITLES,
        }
    }

    /// Configure the cleaning pipeline (default: `CleaningPipeline::standard()`)
    pub fn with_pipeline(mut self, pipeline: CleaningPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Configure the maximum number of titles returned (default: 5)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Parse generated text into at most `limit` titles, in original order.
    pub fn extract(&self, content: &str) -> Vec<MovieTitle> {
        let titles: Vec<MovieTitle> = content
            .lines()
            .map(str::trim)
            .filter(|line| is_list_entry(line))
            .filter_map(|line| self.pipeline.clean(line))
            .take(self.limit)
            .collect();

        debug!(
            "Extracted {} titles from {} lines of generated text",
            titles.len(),
            content.lines().count()
        );
        titles
    }
}

impl Default for TitleExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse generated text with the standard pipeline, keeping at most 5 titles.
pub fn extract_titles(content: &str) -> Vec<MovieTitle> {
    TitleExtractor::new().extract(content)
}
