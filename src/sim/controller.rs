//! Match lifecycle control
//!
//! Idle → Countdown → Running → GameOver → Idle, with pause/resume and
//! abort. All timing is tick-driven: the countdown and the game-over reset
//! are armed on the [`Sequencer`] (generation-guarded so an abort cancels
//! them for good), and the match clock decrements once per second of ticks
//! while running.

use std::collections::VecDeque;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::events::{Cue, MessageColor, SessionEvent, TimerUrgency};
use super::sequence::Sequencer;
use crate::config::GameConfig;
use crate::consts::TICK_HZ;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Pre-game / between games
    Idle,
    /// "5"… "1", "START" sequence in progress
    Countdown,
    /// Timer ticking, scoring enabled
    Running,
    /// Timer frozen, scoring disabled, resumable
    Paused,
    /// Terminal display state, resets to Idle on its own
    GameOver,
}

/// Steps the controller arms on its sequencer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Show the next countdown number; 0 means "START"
    Countdown(u32),
    /// Countdown display finished, begin play
    BeginPlay,
    /// GameOver display period elapsed, reset to Idle
    ResetToIdle,
}

/// The timed-match state machine
#[derive(Debug)]
pub struct MatchController {
    config: GameConfig,
    phase: MatchPhase,
    remaining_secs: u32,
    score_enabled: bool,
    current_score: i32,
    /// Set when the pause came from the user toggle; resume requires it
    paused_by_toggle: bool,
    /// Final score of the last completed match, taken once by the session
    final_score: Option<i32>,
    tick: u64,
    generation: u64,
    /// Ticks accumulated toward the next one-second timer decrement
    second_acc: u32,
    sequencer: Sequencer<Step>,
}

impl MatchController {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            config: config.clone(),
            phase: MatchPhase::Idle,
            remaining_secs: config.game_duration_secs,
            score_enabled: false,
            current_score: 0,
            paused_by_toggle: false,
            final_score: None,
            tick: 0,
            generation: 0,
            second_acc: 0,
            sequencer: Sequencer::new(),
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn score_enabled(&self) -> bool {
        self.score_enabled
    }

    pub fn current_score(&self) -> i32 {
        self.current_score
    }

    /// Current simulation tick count
    pub fn now(&self) -> u64 {
        self.tick
    }

    /// Final score of a completed match, handed out exactly once
    pub fn take_final_score(&mut self) -> Option<i32> {
        self.final_score.take()
    }

    /// Begin a new match; only honored from Idle
    pub fn start(&mut self, out: &mut VecDeque<SessionEvent>) {
        if self.phase != MatchPhase::Idle {
            debug!("start ignored: match already in phase {:?}", self.phase);
            return;
        }
        info!("match starting");
        self.current_score = 0;
        self.remaining_secs = self.config.game_duration_secs;
        self.set_phase(MatchPhase::Countdown, out);
        out.push_back(SessionEvent::ScoreChanged(0));
        self.emit_timer(out);
        out.push_back(SessionEvent::Cue(Cue::AmbientStart));
        self.apply_step(Step::Countdown(self.config.countdown_from), out);
    }

    /// Pause or resume; only Running and toggle-paused states participate
    pub fn toggle_pause(&mut self, out: &mut VecDeque<SessionEvent>) {
        match self.phase {
            MatchPhase::Running => {
                info!("match paused");
                self.score_enabled = false;
                self.paused_by_toggle = true;
                self.set_phase(MatchPhase::Paused, out);
                self.show(out, "Game Paused", MessageColor::Neutral);
                out.push_back(SessionEvent::Cue(Cue::AmbientStop));
            }
            MatchPhase::Paused if self.paused_by_toggle => {
                info!("match resumed");
                self.score_enabled = true;
                self.paused_by_toggle = false;
                self.set_phase(MatchPhase::Running, out);
                self.show(out, "Game Resumed", MessageColor::Neutral);
                out.push_back(SessionEvent::Cue(Cue::AmbientStart));
            }
            MatchPhase::Paused => {
                debug!("pause toggle ignored: pause was not user-initiated");
            }
            phase => {
                debug!("pause toggle ignored in phase {phase:?}");
            }
        }
    }

    /// Abort the match in progress and reset to Idle
    pub fn abort(&mut self, out: &mut VecDeque<SessionEvent>) {
        match self.phase {
            MatchPhase::Countdown | MatchPhase::Running | MatchPhase::Paused => {
                info!("match aborted in phase {:?}", self.phase);
                self.reset(out);
                self.show(out, "Game Aborted", MessageColor::Danger);
                out.push_back(SessionEvent::Cue(Cue::AmbientStop));
            }
            phase => {
                debug!("abort ignored in phase {phase:?}");
            }
        }
    }

    /// Add points to the match score. A no-op unless scoring is enabled.
    /// Returns whether the score changed.
    pub fn add_score(&mut self, points: i32, out: &mut VecDeque<SessionEvent>) -> bool {
        if !self.score_enabled {
            info!("scoring disabled; ignoring {points} points");
            return false;
        }
        self.current_score += points;
        info!("points added: {points}, total score: {}", self.current_score);
        out.push_back(SessionEvent::ScoreChanged(self.current_score));
        true
    }

    /// Advance one fixed timestep
    pub fn tick(&mut self, out: &mut VecDeque<SessionEvent>) {
        self.tick += 1;
        for step in self.sequencer.take_due(self.tick, self.generation) {
            self.apply_step(step, out);
        }
        if self.phase == MatchPhase::Running {
            self.second_acc += 1;
            if self.second_acc >= TICK_HZ {
                self.second_acc = 0;
                self.advance_timer(out);
            }
        }
    }

    fn apply_step(&mut self, step: Step, out: &mut VecDeque<SessionEvent>) {
        match step {
            Step::Countdown(n) => {
                // Generation already filters stale steps; the phase check
                // covers same-generation races all the same.
                if self.phase != MatchPhase::Countdown {
                    debug!("countdown step ignored in phase {:?}", self.phase);
                    return;
                }
                if n == 0 {
                    self.show(out, "START", MessageColor::Success);
                    out.push_back(SessionEvent::Cue(Cue::GameStart));
                    self.arm(Step::BeginPlay, 1);
                } else {
                    self.show(out, &n.to_string(), MessageColor::Neutral);
                    out.push_back(SessionEvent::Cue(Cue::CountdownTick));
                    self.arm(Step::Countdown(n - 1), 1);
                }
            }
            Step::BeginPlay => {
                if self.phase != MatchPhase::Countdown {
                    debug!("begin-play step ignored in phase {:?}", self.phase);
                    return;
                }
                info!("countdown complete, match running");
                self.score_enabled = true;
                self.second_acc = 0;
                self.set_phase(MatchPhase::Running, out);
                self.emit_timer(out);
            }
            Step::ResetToIdle => {
                if self.phase != MatchPhase::GameOver {
                    debug!("reset step ignored in phase {:?}", self.phase);
                    return;
                }
                self.reset(out);
            }
        }
    }

    fn advance_timer(&mut self, out: &mut VecDeque<SessionEvent>) {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.emit_timer(out);
        if self.remaining_secs == 0 {
            self.end_game(out);
        }
    }

    fn end_game(&mut self, out: &mut VecDeque<SessionEvent>) {
        info!("timer expired, final score {}", self.current_score);
        self.score_enabled = false;
        self.final_score = Some(self.current_score);
        self.set_phase(MatchPhase::GameOver, out);
        self.show(out, "Game Over", MessageColor::Danger);
        out.push_back(SessionEvent::Cue(Cue::AmbientStop));
        out.push_back(SessionEvent::Cue(Cue::GameEnd));
        out.push_back(SessionEvent::Haptic {
            intensity: 1.0,
            millis: 400,
        });
        self.arm(Step::ResetToIdle, self.config.game_over_reset_secs);
    }

    /// Return to Idle with the timer at full duration, cancelling any
    /// pending steps for good.
    fn reset(&mut self, out: &mut VecDeque<SessionEvent>) {
        self.generation += 1;
        self.sequencer.cancel_all();
        self.score_enabled = false;
        self.paused_by_toggle = false;
        self.second_acc = 0;
        self.remaining_secs = self.config.game_duration_secs;
        self.set_phase(MatchPhase::Idle, out);
        self.emit_timer(out);
        self.show(out, "Ready", MessageColor::Neutral);
    }

    fn arm(&mut self, step: Step, delay_secs: u32) {
        let due = self.tick + u64::from(delay_secs) * u64::from(TICK_HZ);
        self.sequencer.schedule(due, self.generation, step);
    }

    fn set_phase(&mut self, phase: MatchPhase, out: &mut VecDeque<SessionEvent>) {
        if self.phase != phase {
            self.phase = phase;
            out.push_back(SessionEvent::PhaseChanged(phase));
        }
    }

    fn emit_timer(&self, out: &mut VecDeque<SessionEvent>) {
        let urgency = if self.remaining_secs <= self.config.timer_danger_secs {
            TimerUrgency::Danger
        } else if self.remaining_secs <= self.config.timer_warning_secs {
            TimerUrgency::Warning
        } else {
            TimerUrgency::Normal
        };
        out.push_back(SessionEvent::TimerChanged {
            remaining: self.remaining_secs,
            urgency,
        });
    }

    fn show(&self, out: &mut VecDeque<SessionEvent>, text: &str, color: MessageColor) {
        out.push_back(SessionEvent::Message {
            text: text.to_string(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(duration_secs: u32) -> MatchController {
        let config = GameConfig {
            game_duration_secs: duration_secs,
            ..Default::default()
        };
        MatchController::new(&config)
    }

    fn run_secs(c: &mut MatchController, secs: u32, out: &mut VecDeque<SessionEvent>) {
        for _ in 0..secs * TICK_HZ {
            c.tick(out);
        }
    }

    /// Countdown shows 5..1 then START, one second each, then play begins
    const COUNTDOWN_SECS: u32 = 6;

    #[test]
    fn test_start_runs_countdown_then_running() {
        let mut c = controller(180);
        let mut out = VecDeque::new();

        c.start(&mut out);
        assert_eq!(c.phase(), MatchPhase::Countdown);
        assert!(!c.score_enabled());

        run_secs(&mut c, COUNTDOWN_SECS, &mut out);
        assert_eq!(c.phase(), MatchPhase::Running);
        assert!(c.score_enabled());
        assert_eq!(c.remaining_secs(), 180);
    }

    #[test]
    fn test_countdown_messages_in_order() {
        let mut c = controller(180);
        let mut out = VecDeque::new();
        c.start(&mut out);
        run_secs(&mut c, COUNTDOWN_SECS, &mut out);

        let messages: Vec<String> = out
            .iter()
            .filter_map(|e| match e {
                SessionEvent::Message { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(messages, vec!["5", "4", "3", "2", "1", "START"]);
    }

    #[test]
    fn test_start_is_noop_outside_idle() {
        let mut c = controller(180);
        let mut out = VecDeque::new();
        c.start(&mut out);
        run_secs(&mut c, COUNTDOWN_SECS, &mut out);
        assert_eq!(c.phase(), MatchPhase::Running);

        out.clear();
        c.start(&mut out);
        assert_eq!(c.phase(), MatchPhase::Running);
        assert!(out.is_empty());
    }

    #[test]
    fn test_pause_freezes_timer_and_scoring() {
        let mut c = controller(180);
        let mut out = VecDeque::new();
        c.start(&mut out);
        run_secs(&mut c, COUNTDOWN_SECS + 5, &mut out);
        assert_eq!(c.remaining_secs(), 175);

        c.toggle_pause(&mut out);
        assert_eq!(c.phase(), MatchPhase::Paused);
        assert!(!c.score_enabled());

        run_secs(&mut c, 10, &mut out);
        assert_eq!(c.remaining_secs(), 175);

        c.toggle_pause(&mut out);
        assert_eq!(c.phase(), MatchPhase::Running);
        assert!(c.score_enabled());
        run_secs(&mut c, 1, &mut out);
        assert_eq!(c.remaining_secs(), 174);
    }

    #[test]
    fn test_pause_toggle_noop_during_countdown_and_game_over() {
        let mut c = controller(1);
        let mut out = VecDeque::new();
        c.start(&mut out);
        c.toggle_pause(&mut out);
        assert_eq!(c.phase(), MatchPhase::Countdown);

        run_secs(&mut c, COUNTDOWN_SECS + 1, &mut out);
        assert_eq!(c.phase(), MatchPhase::GameOver);
        c.toggle_pause(&mut out);
        assert_eq!(c.phase(), MatchPhase::GameOver);
    }

    #[test]
    fn test_timer_expiry_ends_game_exactly_once() {
        let mut c = controller(2);
        let mut out = VecDeque::new();
        c.start(&mut out);
        run_secs(&mut c, COUNTDOWN_SECS, &mut out);
        out.clear();

        run_secs(&mut c, 2, &mut out);
        assert_eq!(c.phase(), MatchPhase::GameOver);
        assert!(!c.score_enabled());
        let game_overs = out
            .iter()
            .filter(|e| matches!(e, SessionEvent::PhaseChanged(MatchPhase::GameOver)))
            .count();
        assert_eq!(game_overs, 1);
        assert_eq!(c.take_final_score(), Some(0));
        assert_eq!(c.take_final_score(), None);
    }

    #[test]
    fn test_game_over_resets_to_idle_after_delay() {
        let mut c = controller(1);
        let mut out = VecDeque::new();
        c.start(&mut out);
        run_secs(&mut c, COUNTDOWN_SECS + 1, &mut out);
        assert_eq!(c.phase(), MatchPhase::GameOver);

        run_secs(&mut c, GameConfig::default().game_over_reset_secs, &mut out);
        assert_eq!(c.phase(), MatchPhase::Idle);
        assert_eq!(c.remaining_secs(), 1);
    }

    #[test]
    fn test_abort_mid_countdown_cancels_pending_steps() {
        let mut c = controller(180);
        let mut out = VecDeque::new();
        c.start(&mut out);
        run_secs(&mut c, 2, &mut out);
        assert_eq!(c.phase(), MatchPhase::Countdown);

        c.abort(&mut out);
        assert_eq!(c.phase(), MatchPhase::Idle);
        assert!(!c.score_enabled());
        assert_eq!(c.remaining_secs(), 180);

        // No late countdown step may fire after the abort
        out.clear();
        run_secs(&mut c, COUNTDOWN_SECS + 2, &mut out);
        assert_eq!(c.phase(), MatchPhase::Idle);
        assert!(out.is_empty());
    }

    #[test]
    fn test_abort_ignored_when_idle() {
        let mut c = controller(180);
        let mut out = VecDeque::new();
        c.abort(&mut out);
        assert_eq!(c.phase(), MatchPhase::Idle);
        assert!(out.is_empty());
    }

    #[test]
    fn test_add_score_gated_on_enablement() {
        let mut c = controller(180);
        let mut out = VecDeque::new();
        assert!(!c.add_score(3, &mut out));
        assert_eq!(c.current_score(), 0);

        c.start(&mut out);
        run_secs(&mut c, COUNTDOWN_SECS, &mut out);
        assert!(c.add_score(3, &mut out));
        assert!(c.add_score(2, &mut out));
        assert_eq!(c.current_score(), 5);

        c.toggle_pause(&mut out);
        assert!(!c.add_score(1, &mut out));
        assert_eq!(c.current_score(), 5);
    }

    #[test]
    fn test_timer_urgency_thresholds() {
        let mut c = controller(12);
        let mut out = VecDeque::new();
        c.start(&mut out);
        run_secs(&mut c, COUNTDOWN_SECS, &mut out);
        out.clear();

        run_secs(&mut c, 12, &mut out);
        let urgencies: Vec<TimerUrgency> = out
            .iter()
            .filter_map(|e| match e {
                SessionEvent::TimerChanged { urgency, .. } => Some(*urgency),
                _ => None,
            })
            .collect();
        // 11..=0 remaining: 11 normal, 10..=4 warning, 3..=0 danger
        assert_eq!(urgencies[0], TimerUrgency::Normal);
        assert_eq!(urgencies[1], TimerUrgency::Warning);
        assert_eq!(urgencies[8], TimerUrgency::Danger);
        assert_eq!(urgencies[11], TimerUrgency::Danger);
    }

    #[test]
    fn test_restart_after_completed_match() {
        let mut c = controller(1);
        let mut out = VecDeque::new();
        c.start(&mut out);
        run_secs(&mut c, COUNTDOWN_SECS, &mut out);
        c.add_score(2, &mut out);
        run_secs(
            &mut c,
            1 + GameConfig::default().game_over_reset_secs,
            &mut out,
        );
        assert_eq!(c.phase(), MatchPhase::Idle);

        c.start(&mut out);
        assert_eq!(c.current_score(), 0);
        run_secs(&mut c, COUNTDOWN_SECS, &mut out);
        assert_eq!(c.phase(), MatchPhase::Running);
    }
}
