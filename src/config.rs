//! Game settings and tuning values
//!
//! Loaded from a JSON file when the host provides one; defaults mirror the
//! standard court setup (3-minute matches, 5-second countdown, 8-entry
//! leaderboard). Invalid values are rejected at load time so the rest of the
//! crate never re-validates them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::secs_to_ticks;

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Match duration in seconds
    pub game_duration_secs: u32,
    /// First number of the pre-game countdown
    pub countdown_from: u32,
    /// Remaining seconds at which the timer display turns urgent
    pub timer_warning_secs: u32,
    /// Remaining seconds at which the timer display turns critical
    pub timer_danger_secs: u32,
    /// How long the "Game Over" screen holds before resetting to idle
    pub game_over_reset_secs: u32,

    /// Seconds the ball may sit still before it is respawned
    pub respawn_inactivity_secs: f32,
    /// Ball speed below which it counts as sitting still
    pub ball_idle_speed: f32,

    /// Maximum number of leaderboard entries
    pub leaderboard_capacity: usize,
    /// Zone value assumed before the first zone entry
    pub default_zone: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_duration_secs: GAME_DURATION_SECS,
            countdown_from: COUNTDOWN_FROM,
            timer_warning_secs: TIMER_WARNING_SECS,
            timer_danger_secs: TIMER_DANGER_SECS,
            game_over_reset_secs: GAME_OVER_RESET_SECS,
            respawn_inactivity_secs: RESPAWN_INACTIVITY_SECS,
            ball_idle_speed: BALL_IDLE_SPEED,
            leaderboard_capacity: MAX_LEADERBOARD_ENTRIES,
            default_zone: DEFAULT_ZONE,
        }
    }
}

impl GameConfig {
    /// Check invariants the state machines rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game_duration_secs == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if self.countdown_from == 0 {
            return Err(ConfigError::ZeroCountdown);
        }
        if self.leaderboard_capacity == 0 {
            return Err(ConfigError::ZeroLeaderboardCapacity);
        }
        if self.respawn_inactivity_secs <= 0.0 {
            return Err(ConfigError::NonPositiveInactivity);
        }
        if self.timer_danger_secs > self.timer_warning_secs {
            return Err(ConfigError::ThresholdOrder {
                warning: self.timer_warning_secs,
                danger: self.timer_danger_secs,
            });
        }
        Ok(())
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Write the config as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        log::info!("config saved to {}", path.display());
        Ok(())
    }

    /// Inactivity window expressed in simulation ticks
    pub fn inactivity_ticks(&self) -> u32 {
        secs_to_ticks(self.respawn_inactivity_secs)
    }
}
