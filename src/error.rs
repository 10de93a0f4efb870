//! Error types
//!
//! Only configuration problems surface as errors; invalid event sequences
//! and disallowed state-machine calls are logged and ignored where they
//! occur, never propagated across component boundaries.

use thiserror::Error;

/// Errors raised when loading or validating a [`crate::GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file")]
    Parse(#[from] serde_json::Error),
    #[error("game duration must be at least 1 second")]
    ZeroDuration,
    #[error("countdown must start from at least 1")]
    ZeroCountdown,
    #[error("leaderboard capacity must be nonzero")]
    ZeroLeaderboardCapacity,
    #[error("respawn inactivity window must be positive")]
    NonPositiveInactivity,
    #[error("danger threshold {danger}s must not exceed warning threshold {warning}s")]
    ThresholdOrder { warning: u32, danger: u32 },
}
