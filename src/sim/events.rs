//! Input and output event types for the simulation core
//!
//! The host feeds a [`TickInput`] batch into every tick and drains
//! [`SessionEvent`]s afterwards. All engine-side effects (audio, haptics,
//! text panels, the ball rigid body) are expressed as output events; the
//! core never calls the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::controller::MatchPhase;
use crate::format_clock;

/// Collider name the hoop reports for the upper scoring volume
pub const SCORE_COLLIDER: &str = "score_collider";
/// Collider name the hoop reports for the lower anti-cheat volume
pub const CHEAT_COLLIDER: &str = "cheat_collider";

/// Trigger volume the ball touched, parsed from the raw collider name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColliderTag {
    Score,
    Cheat,
    Other(String),
}

impl ColliderTag {
    pub fn from_name(name: &str) -> Self {
        match name {
            SCORE_COLLIDER => Self::Score,
            CHEAT_COLLIDER => Self::Cheat,
            other => Self::Other(other.to_string()),
        }
    }
}

/// One enter/exit report from the hoop's trigger volumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoopEvent {
    pub collider: ColliderTag,
    /// true when the ball left the volume, false when it entered
    pub exiting: bool,
}

impl HoopEvent {
    pub fn enter(name: &str) -> Self {
        Self {
            collider: ColliderTag::from_name(name),
            exiting: false,
        }
    }

    pub fn exit(name: &str) -> Self {
        Self {
            collider: ColliderTag::from_name(name),
            exiting: true,
        }
    }
}

/// Input commands and collaborator reports for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start a new match (button press)
    pub start: bool,
    /// Pause/resume toggle
    pub toggle_pause: bool,
    /// Abort the match in progress
    pub abort: bool,
    /// Flip between Freestyle and Timed mode
    pub toggle_mode: bool,
    /// Manual ball respawn request
    pub force_respawn: bool,
    /// Zone entries reported by the zone detectors this tick
    pub zone_entries: Vec<i32>,
    /// Hoop trigger events reported by the collision subsystem this tick
    pub hoop_events: Vec<HoopEvent>,
    /// Current ball speed, if the rigid body reported one
    pub ball_speed: Option<f32>,
}

/// Timer display urgency, derived from remaining seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerUrgency {
    Normal,
    Warning,
    Danger,
}

/// Tint for feedback messages; the panel maps these to actual colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageColor {
    Neutral,
    Success,
    Danger,
}

/// Fire-and-forget audio cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    CountdownTick,
    GameStart,
    GameEnd,
    AmbientStart,
    AmbientStop,
    Respawn,
    Blocked,
}

/// Everything the core wants the host to do, drained once per tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Push the new total to the score display
    ScoreChanged(i32),
    /// Refresh the timer display
    TimerChanged { remaining: u32, urgency: TimerUrgency },
    /// The match controller moved to a new phase
    PhaseChanged(MatchPhase),
    /// Show a message on the shared panel (the panel auto-clears it)
    Message { text: String, color: MessageColor },
    /// Play an audio cue
    Cue(Cue),
    /// Pulse the controller haptics
    Haptic { intensity: f32, millis: u32 },
    /// Reset the ball rigid body to its spawn point
    RespawnBall,
    /// Leaderboard contents changed, highest first
    LeaderboardUpdated(Vec<i32>),
}

impl fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScoreChanged(score) => write!(f, "score: {score}"),
            Self::TimerChanged { remaining, urgency } => {
                write!(f, "timer: {} ({urgency:?})", format_clock(*remaining))
            }
            Self::PhaseChanged(phase) => write!(f, "phase: {phase:?}"),
            Self::Message { text, color } => write!(f, "message [{color:?}]: {text}"),
            Self::Cue(cue) => write!(f, "cue: {cue:?}"),
            Self::Haptic { intensity, millis } => {
                write!(f, "haptic: {intensity:.1} for {millis}ms")
            }
            Self::RespawnBall => write!(f, "respawn ball"),
            Self::LeaderboardUpdated(scores) => write!(f, "leaderboard: {scores:?}"),
        }
    }
}
