//! Per-session shot statistics
//!
//! Streaks, shot totals and the average interval between made shots.
//! Intervals are measured in simulation ticks so the numbers stay
//! deterministic across hosts.

use serde::Serialize;

use crate::consts::TICK_HZ;

#[derive(Debug, Default, Serialize)]
pub struct ShotStats {
    current_streak: u32,
    highest_streak: u32,
    total_shots: u32,
    interval_acc_ticks: u64,
    last_shot_tick: Option<u64>,
}

impl ShotStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear everything for a new session
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record a made shot at the given simulation tick
    pub fn record_shot(&mut self, now_tick: u64) {
        self.total_shots += 1;
        self.current_streak += 1;
        if self.current_streak > self.highest_streak {
            self.highest_streak = self.current_streak;
        }
        if let Some(last) = self.last_shot_tick {
            self.interval_acc_ticks += now_tick.saturating_sub(last);
        }
        self.last_shot_tick = Some(now_tick);
    }

    /// A dead ball or miss ends the current streak
    pub fn break_streak(&mut self) {
        self.current_streak = 0;
    }

    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    pub fn highest_streak(&self) -> u32 {
        self.highest_streak
    }

    pub fn total_shots(&self) -> u32 {
        self.total_shots
    }

    /// Average seconds between made shots; zero until two shots exist
    pub fn avg_shot_interval_secs(&self) -> f32 {
        if self.total_shots < 2 {
            return 0.0;
        }
        let intervals = u64::from(self.total_shots - 1);
        (self.interval_acc_ticks as f32 / intervals as f32) / TICK_HZ as f32
    }
}
