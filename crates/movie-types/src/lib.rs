//! # Movie Types Crate
//!
//! Shared data model for the recommendation service.
//!
//! ## Main Components
//!
//! - **types**: request, title, record and result types plus sentinel constants
//! - **error**: validation errors for caller-supplied values
//!
//! ## Example Usage
//!
//! ```ignore
//! use movie_types::{MovieRecord, MovieTitle, RecommendationRequest, RecommendationResult};
//!
//! let request = RecommendationRequest::new("time travel stories")?;
//! let title = MovieTitle::new("Primer")?;
//!
//! let result = RecommendationResult::from_records(
//!     request.text(),
//!     vec![MovieRecord::placeholder(&title)],
//! );
//! assert_eq!(result.movie_names, vec!["Primer"]);
//! ```

pub mod error;
pub mod types;

pub use error::{Result, ValidationError};
pub use types::{
    // Constants
    DETAILS_NOT_AVAILABLE,
    MAX_TITLES,
    NOT_AVAILABLE,
    // Core types
    MovieRecord,
    MovieTitle,
    RecommendationRequest,
    RecommendationResult,
};
