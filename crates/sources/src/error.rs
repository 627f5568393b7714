//! Error types for metadata lookups.

use thiserror::Error;

/// Why a single metadata lookup produced no record.
///
/// The aggregator treats every variant the same way (a placeholder record);
/// the distinction exists for logging and tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Request to metadata service failed: {0}")]
    Transport(String),

    #[error("Metadata service responded with status {status}")]
    Rejected { status: u16 },

    #[error("Movie not found: {reason}")]
    NotFound { reason: String },

    #[error("Invalid response from metadata service: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, LookupError>;
