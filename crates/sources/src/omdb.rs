//! OMDb Source - metadata lookup by exact title
//!
//! ## Protocol
//! 1. `GET {base_url}/?t={title}&apikey={key}`
//! 2. The body is a flat JSON object with a `"Response"` flag
//!    (`"True"` / `"False"`) and PascalCase metadata fields
//! 3. Missing fields become `NOT_AVAILABLE`; a `"N/A"` poster becomes `None`

use crate::config::OmdbConfig;
use crate::error::{LookupError, Result};
use crate::traits::MetadataSource;
use async_trait::async_trait;
use movie_types::{MovieRecord, MovieTitle, NOT_AVAILABLE};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Raw OMDb response for a title query.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OmdbMovie {
    response: Option<String>,
    error: Option<String>,
    title: Option<String>,
    year: Option<String>,
    genre: Option<String>,
    director: Option<String>,
    actors: Option<String>,
    plot: Option<String>,
    poster: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    runtime: Option<String>,
    language: Option<String>,
    country: Option<String>,
}

impl OmdbMovie {
    fn found(&self) -> bool {
        self.response.as_deref() == Some("True")
    }

    fn into_record(self, queried: &MovieTitle) -> MovieRecord {
        let or_na = |field: Option<String>| field.unwrap_or_else(|| NOT_AVAILABLE.to_string());

        MovieRecord {
            title: self.title.unwrap_or_else(|| queried.as_str().to_string()),
            year: or_na(self.year),
            genre: or_na(self.genre),
            director: or_na(self.director),
            actors: or_na(self.actors),
            plot: or_na(self.plot),
            poster_url: self.poster.filter(|p| p != NOT_AVAILABLE),
            imdb_rating: or_na(self.imdb_rating),
            runtime: or_na(self.runtime),
            language: or_na(self.language),
            country: or_na(self.country),
        }
    }
}

/// Interpret an OMDb response body for `title`.
pub fn parse_lookup(title: &MovieTitle, body: &[u8]) -> Result<MovieRecord> {
    let movie: OmdbMovie =
        serde_json::from_slice(body).map_err(|e| LookupError::Malformed(e.to_string()))?;

    if !movie.found() {
        return Err(LookupError::NotFound {
            reason: movie
                .error
                .unwrap_or_else(|| "no matching movie".to_string()),
        });
    }

    Ok(movie.into_record(title))
}

/// Metadata source backed by the OMDb API
pub struct OmdbClient {
    http: reqwest::Client,
    config: OmdbConfig,
}

impl OmdbClient {
    /// Create a client from configuration.
    pub fn new(config: OmdbConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LookupError::Client(e.to_string()))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &OmdbConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!("{}/", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl MetadataSource for OmdbClient {
    fn name(&self) -> &str {
        "omdb"
    }

    #[instrument(skip(self, title), fields(title = %title))]
    async fn lookup(&self, title: &MovieTitle) -> Result<MovieRecord> {
        let response = self
            .http
            .get(self.endpoint())
            .query(&[("t", title.as_str()), ("apikey", self.config.api_key.as_str())])
            .send()
            .await
            // The URL carries the API key
            .map_err(|e| LookupError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Metadata service responded with status {}", status);
            return Err(LookupError::Rejected {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| LookupError::Transport(e.without_url().to_string()))?;

        let record = parse_lookup(title, &bytes)?;
        debug!("Found metadata for {} ({})", record.title, record.year);
        Ok(record)
    }
}
