//! # Sources Crate
//!
//! This crate implements metadata sources used to enrich extracted titles.
//!
//! ## Components
//!
//! ### OMDb Source
//! Exact-title lookup against the OMDb API:
//! - One GET per title, title and key passed as query parameters
//! - Missing fields become `"N/A"`, a `"N/A"` poster becomes `None`
//!
//! ### Metadata Aggregator
//! Sequential enrichment of a list of titles:
//! - One record per title, order preserved
//! - Failed lookups become placeholder records instead of errors
//! - Configurable pause between lookups
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{MetadataAggregator, OmdbClient, OmdbConfig, Pacing};
//! use std::sync::Arc;
//!
//! let omdb = OmdbClient::new(OmdbConfig { api_key: key, ..OmdbConfig::default() })?;
//! let aggregator = MetadataAggregator::new(Arc::new(omdb))
//!     .with_pacing(Pacing::from_millis(500));
//!
//! let records = aggregator.aggregate(&titles).await;
//! assert_eq!(records.len(), titles.len());
//! ```

// Public modules
pub mod aggregator;
pub mod config;
pub mod error;
pub mod omdb;
pub mod pacing;
pub mod traits;

// Re-export commonly used types
pub use aggregator::MetadataAggregator;
pub use config::OmdbConfig;
pub use error::LookupError;
pub use omdb::{OmdbClient, parse_lookup};
pub use pacing::{DEFAULT_DELAY, Pacing};
pub use traits::MetadataSource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_omdb_client_creation() {
        let client = OmdbClient::new(OmdbConfig::default()).unwrap();
        assert_eq!(client.name(), "omdb");
        assert_eq!(client.config().base_url, "https://www.omdbapi.com");
    }

    #[test]
    fn test_aggregator_default_pacing() {
        let client = OmdbClient::new(OmdbConfig::default()).unwrap();
        let aggregator = MetadataAggregator::new(std::sync::Arc::new(client));
        assert_eq!(aggregator.pacing(), Pacing::Fixed(DEFAULT_DELAY));
    }
}
