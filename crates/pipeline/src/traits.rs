//! Core trait for the title cleaning pipeline.
//!
//! Each `Cleaner` performs one small, composable rewrite of a raw line of
//! generated text on its way to becoming a `MovieTitle`.

/// A single cleanup step applied to a candidate title.
///
/// ## Design Note
/// - Steps only strip or truncate, so they return a sub-slice of the input
///   and never allocate
/// - `Send + Sync` lets one pipeline be shared across request handlers
pub trait Cleaner: Send + Sync {
    /// Returns the name of this step (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this step, returning the trimmed remainder.
    fn clean<'a>(&self, title: &'a str) -> &'a str;
}
