//! # Recommendation Orchestrator
//!
//! This module coordinates one recommendation request:
//! 1. Ask the title source for up to 5 titles
//! 2. Stop with a top-level error if extraction failed
//! 3. Enrich every title through the metadata aggregator, in order
//! 4. Assemble the parallel name/poster/detail lists
//!
//! Extraction failure is terminal for the request; a failed metadata
//! lookup only degrades its own record.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::AppConfig;
use llm_client::{GeminiClient, TitleSource};
use movie_types::{RecommendationRequest, RecommendationResult};
use sources::{MetadataAggregator, MetadataSource, OmdbClient, Pacing};

/// Main orchestrator that coordinates extraction and enrichment
#[derive(Clone)]
pub struct RecommendationOrchestrator {
    titles: Arc<dyn TitleSource>,
    aggregator: MetadataAggregator,
}

impl RecommendationOrchestrator {
    /// Create an orchestrator from already-built components
    ///
    /// # Arguments
    /// * `titles` - Source of movie titles for free-form input
    /// * `metadata` - Source of per-title metadata
    /// * `pacing` - Pause between successive metadata lookups
    pub fn new(
        titles: Arc<dyn TitleSource>,
        metadata: Arc<dyn MetadataSource>,
        pacing: Pacing,
    ) -> Self {
        Self {
            titles,
            aggregator: MetadataAggregator::new(metadata).with_pacing(pacing),
        }
    }

    /// Create an orchestrator talking to Gemini and OMDb
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let gemini = GeminiClient::new(config.gemini.clone())
            .context("Failed to create generation client")?;
        let omdb = OmdbClient::new(config.omdb.clone())
            .context("Failed to create metadata client")?;

        Ok(Self::new(
            Arc::new(gemini),
            Arc::new(omdb),
            config.pacing.pacing(),
        ))
    }

    /// Main entry point: get titles and metadata for one request
    ///
    /// Never fails; problems are reported through `RecommendationResult::error`
    /// or as placeholder records.
    pub async fn get_complete_movie_data(
        &self,
        request: &RecommendationRequest,
    ) -> RecommendationResult {
        let start_time = Instant::now();
        info!("Getting movie recommendations for: '{}'", request.text());

        let titles = match self.titles.extract(request.text()).await {
            Ok(titles) => titles,
            Err(e) => {
                warn!("Title extraction failed: {}", e);
                return RecommendationResult::failed(
                    request.text(),
                    format!("Failed to get recommendations: {e}"),
                );
            }
        };
        info!("Found {} titles, getting details and posters", titles.len());

        let records = self.aggregator.aggregate(&titles).await;
        let missing = records.iter().filter(|r| r.is_placeholder()).count();
        if missing > 0 {
            warn!("{} of {} titles have no metadata", missing, records.len());
        }

        let result = RecommendationResult::from_records(request.text(), records);
        info!(
            "Assembled {} recommendations in {:.2?}",
            result.len(),
            start_time.elapsed()
        );
        result
    }
}
