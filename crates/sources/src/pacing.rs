//! Pause policy applied between successive metadata lookups.

use std::time::Duration;

/// Default pause between lookups
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// How long to wait between two lookups against the metadata service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// No pause at all (tests, local mocks)
    Disabled,
    /// Sleep for a fixed duration
    Fixed(Duration),
}

impl Pacing {
    /// `0` disables pacing
    pub fn from_millis(millis: u64) -> Self {
        if millis == 0 {
            Pacing::Disabled
        } else {
            Pacing::Fixed(Duration::from_millis(millis))
        }
    }

    pub fn delay(&self) -> Duration {
        match self {
            Pacing::Disabled => Duration::ZERO,
            Pacing::Fixed(delay) => *delay,
        }
    }

    /// Wait according to the policy.
    pub async fn pause(&self) {
        if let Pacing::Fixed(delay) = self {
            tokio::time::sleep(*delay).await;
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing::Fixed(DEFAULT_DELAY)
    }
}
