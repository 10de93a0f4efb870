//! Session wiring
//!
//! One [`GameSession`] per court: it owns the match controller, the scoring
//! tracker, the respawn watchdog, statistics, the mode switch and the
//! leaderboard, and routes each [`TickInput`] through them in a fixed order.
//! The host drains the output queue after every tick.

use std::collections::VecDeque;

use log::info;

use super::controller::{MatchController, MatchPhase};
use super::events::{MessageColor, SessionEvent, TickInput};
use super::respawn::RespawnWatchdog;
use super::scoring::ScoreTracker;
use crate::config::GameConfig;
use crate::court::ModeSwitcher;
use crate::highscores::Leaderboard;
use crate::stats::ShotStats;

pub struct GameSession {
    controller: MatchController,
    tracker: ScoreTracker,
    watchdog: RespawnWatchdog,
    stats: ShotStats,
    mode: ModeSwitcher,
    leaderboard: Leaderboard,
    events: VecDeque<SessionEvent>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            controller: MatchController::new(&config),
            tracker: ScoreTracker::new(config.default_zone),
            watchdog: RespawnWatchdog::new(&config),
            stats: ShotStats::new(),
            mode: ModeSwitcher::default(),
            leaderboard: Leaderboard::new(config.leaderboard_capacity),
            events: VecDeque::new(),
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.controller.phase()
    }

    pub fn controller(&self) -> &MatchController {
        &self.controller
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn stats(&self) -> &ShotStats {
        &self.stats
    }

    /// Advance the session by one fixed timestep
    pub fn tick(&mut self, input: &TickInput) {
        let out = &mut self.events;

        // Commands first, in a fixed order
        if input.start {
            self.stats.reset();
            self.controller.start(out);
        }
        if input.toggle_pause {
            self.controller.toggle_pause(out);
        }
        if input.abort {
            self.controller.abort(out);
        }
        if input.toggle_mode {
            let mode = self.mode.toggle();
            out.push_back(SessionEvent::Message {
                text: mode.to_string(),
                color: MessageColor::Neutral,
            });
        }

        // Zone and hoop traffic
        for &zone in &input.zone_entries {
            self.tracker.zone_entered(zone);
        }
        for event in &input.hoop_events {
            if let Some(points) = self.tracker.hoop_event(event) {
                // The controller is the single scoring gate
                if self.controller.add_score(points, out) {
                    self.stats.record_shot(self.controller.now());
                    out.push_back(SessionEvent::Haptic {
                        intensity: 0.8,
                        millis: 200,
                    });
                }
            }
        }

        // Time advances
        self.controller.tick(out);

        // Ball watchdog follows the match pause state
        self.watchdog
            .set_paused(self.controller.phase() == MatchPhase::Paused);
        if input.force_respawn {
            self.watchdog.force_respawn(out);
        }
        let before = out.len();
        self.watchdog.tick(input.ball_speed, out);
        let respawned = out
            .iter()
            .skip(before)
            .any(|e| matches!(e, SessionEvent::RespawnBall));
        if respawned {
            // A dead ball ends the current make streak
            self.stats.break_streak();
        }

        // A completed match pushes its final score exactly once
        if let Some(final_score) = self.controller.take_final_score() {
            if let Some(rank) = self.leaderboard.add(final_score) {
                info!("final score {final_score} entered leaderboard at rank {rank}");
            } else {
                info!("final score {final_score} did not make the leaderboard");
            }
            out.push_back(SessionEvent::LeaderboardUpdated(
                self.leaderboard.scores().to_vec(),
            ));
        }
    }

    /// Hand the accumulated output events to the host
    pub fn drain_events(&mut self) -> VecDeque<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}
