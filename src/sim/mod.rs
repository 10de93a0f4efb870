//! Deterministic game-logic module
//!
//! All gameplay state lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No engine, rendering or platform dependencies
//! - Host-visible effects only through the drained event queue

pub mod controller;
pub mod events;
pub mod respawn;
pub mod scoring;
pub mod sequence;
pub mod session;

pub use controller::{MatchController, MatchPhase};
pub use events::{
    CHEAT_COLLIDER, ColliderTag, Cue, HoopEvent, MessageColor, SCORE_COLLIDER, SessionEvent,
    TickInput, TimerUrgency,
};
pub use respawn::RespawnWatchdog;
pub use scoring::ScoreTracker;
pub use sequence::Sequencer;
pub use session::GameSession;
