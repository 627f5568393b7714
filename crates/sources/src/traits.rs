//! Core trait for metadata sources.

use crate::error::Result;
use async_trait::async_trait;
use movie_types::{MovieRecord, MovieTitle};

/// A service that can look up metadata for a single movie title.
///
/// `Send + Sync` allows one source to be shared by concurrent requests.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Returns the name of this source (for logging/debugging)
    fn name(&self) -> &str;

    /// Look up one title by its exact text.
    async fn lookup(&self, title: &MovieTitle) -> Result<MovieRecord>;
}
