//! Metadata Aggregator - sequential enrichment of extracted titles
//!
//! ## Algorithm
//! 1. Walk the titles in input order, one at a time
//! 2. Look each title up in the metadata source
//! 3. On success keep the returned record, on any failure keep a
//!    placeholder carrying the extracted title
//! 4. Pause between lookups according to the pacing policy
//!
//! Lookups run one at a time; there is no pause after the last one.

use crate::pacing::Pacing;
use crate::traits::MetadataSource;
use movie_types::{MovieRecord, MovieTitle};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Enriches titles with metadata, never dropping a position.
#[derive(Clone)]
pub struct MetadataAggregator {
    source: Arc<dyn MetadataSource>,
    pacing: Pacing,
}

impl MetadataAggregator {
    /// Create an aggregator with the default pacing (500ms between lookups)
    pub fn new(source: Arc<dyn MetadataSource>) -> Self {
        Self {
            source,
            pacing: Pacing::default(),
        }
    }

    /// Configure the pause between lookups
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Look up one title, falling back to a placeholder record.
    pub async fn lookup_or_placeholder(&self, title: &MovieTitle) -> MovieRecord {
        match self.source.lookup(title).await {
            Ok(record) => record,
            Err(e) => {
                warn!(
                    "No metadata from {} for '{}': {}",
                    self.source.name(),
                    title,
                    e
                );
                MovieRecord::placeholder(title)
            }
        }
    }

    /// Returns exactly one record per title, in input order.
    #[instrument(skip(self, titles), fields(count = titles.len()))]
    pub async fn aggregate(&self, titles: &[MovieTitle]) -> Vec<MovieRecord> {
        let total = titles.len();
        let mut records = Vec::with_capacity(total);

        for (i, title) in titles.iter().enumerate() {
            info!("{}/{} Processing: {}", i + 1, total, title);
            records.push(self.lookup_or_placeholder(title).await);

            if i + 1 < total {
                self.pacing.pause().await;
            }
        }

        records
    }
}
