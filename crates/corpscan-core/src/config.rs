//! Search configuration and fail-fast validation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tuning knobs for a single hierarchy traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum recursion depth; 1 = only the root's direct subsidiaries.
    pub max_depth: u32,
    /// Fixed pause each worker takes before its own lookup.
    pub delay_between_searches: Duration,
    /// Maximum number of concurrent lookups across all depth levels.
    pub max_workers: usize,
    /// Upper bound on a single lookup call; a timed-out lookup counts as failed.
    pub lookup_timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            delay_between_searches: Duration::from_secs(2),
            max_workers: 2,
            lookup_timeout: Duration::from_secs(30),
        }
    }
}

impl SearchConfig {
    /// Reject invalid configurations before any traversal work is attempted.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidMaxDepth(self.max_depth));
        }
        if self.max_workers == 0 {
            return Err(ConfigError::InvalidMaxWorkers(self.max_workers));
        }
        if self.delay_between_searches.is_zero() {
            return Err(ConfigError::InvalidDelay);
        }
        if self.lookup_timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }
}
