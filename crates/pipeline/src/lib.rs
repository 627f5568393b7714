//! Pipeline for turning generated text into clean movie titles.
//!
//! This crate provides:
//! - Cleaner trait and implementations for per-line cleanup
//! - CleaningPipeline for composing cleaners
//! - TitleExtractor for picking list entries out of free text
//!
//! ## Architecture
//! Generated text is processed in stages:
//! 1. Lines that are not list entries are dropped
//! 2. Each entry runs through the cleaners (marker, parenthetical, annotation)
//! 3. The first few surviving titles are returned in order
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{CleaningPipeline, TitleExtractor};
//! use pipeline::cleaners::*;
//!
//! let extractor = TitleExtractor::new()
//!     .with_pipeline(
//!         CleaningPipeline::new()
//!             .add_cleaner(StripMarker::default())
//!             .add_cleaner(TruncateParenthetical),
//!     )
//!     .with_limit(5);
//!
//! let titles = extractor.extract("1. Looper (2012)\n2. Primer");
//! ```

pub mod traits;
pub mod cleaners;
pub mod cleaning_pipeline;
pub mod extract;

// Re-export main types
pub use traits::Cleaner;
pub use cleaning_pipeline::CleaningPipeline;
pub use extract::{TitleExtractor, extract_titles, is_list_entry};
