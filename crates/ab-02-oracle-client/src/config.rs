//! # Oracle Client Configuration

use serde::{Deserialize, Serialize};

/// Default fixed polling interval.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5_000;

/// Oracle client configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OracleClientConfig {
    /// Fixed interval between status polls, in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for OracleClientConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl OracleClientConfig {
    /// Create a config for testing (fast polling).
    pub fn for_testing() -> Self {
        Self {
            poll_interval_ms: 10,
        }
    }
}
