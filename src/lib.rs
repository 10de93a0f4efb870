//! Backboard - logic core for a VR/AR basketball mini-game
//!
//! Core modules:
//! - `sim`: Deterministic game logic (scoring, match control, ball respawn)
//! - `highscores`: Session leaderboard
//! - `stats`: Shot statistics
//! - `court`: Hoop rigging and game-mode switching
//! - `placement`: AR wall placement
//! - `config`: Data-driven game settings

pub mod config;
pub mod court;
pub mod error;
pub mod highscores;
pub mod placement;
pub mod sim;
pub mod stats;

pub use config::GameConfig;
pub use error::ConfigError;
pub use highscores::Leaderboard;
pub use sim::{GameSession, SessionEvent, TickInput};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick rate (ticks per second)
    pub const TICK_HZ: u32 = 60;

    /// Match duration in seconds (3 minutes)
    pub const GAME_DURATION_SECS: u32 = 180;
    /// Countdown start value ("5" down to "1", then "START")
    pub const COUNTDOWN_FROM: u32 = 5;
    /// Timer urgency flips to warning at this many seconds remaining
    pub const TIMER_WARNING_SECS: u32 = 10;
    /// Timer urgency flips to danger at this many seconds remaining
    pub const TIMER_DANGER_SECS: u32 = 3;
    /// GameOver display period before the automatic reset (seconds)
    pub const GAME_OVER_RESET_SECS: u32 = 5;

    /// Ball speed below this counts as inactive
    pub const BALL_IDLE_SPEED: f32 = 0.1;
    /// Seconds of inactivity before the ball respawns
    pub const RESPAWN_INACTIVITY_SECS: f32 = 3.0;

    /// Leaderboard capacity
    pub const MAX_LEADERBOARD_ENTRIES: usize = 8;
    /// Zone assumed before the ball has entered any zone (largest zone)
    pub const DEFAULT_ZONE: i32 = 3;
}

/// Format remaining seconds as an MM:SS clock string
#[inline]
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Convert a duration in seconds to whole simulation ticks
#[inline]
pub fn secs_to_ticks(secs: f32) -> u32 {
    (secs * consts::TICK_HZ as f32).round() as u32
}
