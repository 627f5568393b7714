//! Cleaner implementations for the title pipeline.
//!
//! This module contains the concrete cleanup steps that can be composed
//! into a CleaningPipeline.

pub mod annotation;
pub mod marker;
pub mod parenthetical;

// Re-export for convenience
pub use annotation::TruncateAnnotation;
pub use marker::{DEFAULT_MARKERS, StripMarker};
pub use parenthetical::TruncateParenthetical;
