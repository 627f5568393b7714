//! Server crate for the movie recommendation service.
//!
//! This crate contains the orchestrator that ties title extraction to
//! metadata enrichment, the service configuration, and the HTTP API.

pub mod api;
pub mod config;
pub mod orchestrator;

pub use api::{router, serve};
pub use config::{AppConfig, ConfigError, PacingConfig};
pub use orchestrator::RecommendationOrchestrator;
