//! Ball inactivity watchdog
//!
//! Watches the speed the host's rigid body reports each tick and asks for a
//! respawn once the ball has sat still for the configured window. Manual
//! respawn requests are refused while the match is paused.

use std::collections::VecDeque;

use log::{error, info, warn};

use super::events::{Cue, MessageColor, SessionEvent};
use crate::config::GameConfig;

#[derive(Debug)]
pub struct RespawnWatchdog {
    /// Ticks of inactivity required before a respawn
    inactivity_ticks: u32,
    /// Ball speed below which it counts as sitting still
    idle_speed: f32,
    idle_acc: u32,
    paused: bool,
    /// One error per gap in rigid-body reports
    missing_report_logged: bool,
}

impl RespawnWatchdog {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            inactivity_ticks: config.inactivity_ticks(),
            idle_speed: config.ball_idle_speed,
            idle_acc: 0,
            paused: false,
            missing_report_logged: false,
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance one tick with the host-reported ball speed
    pub fn tick(&mut self, ball_speed: Option<f32>, out: &mut VecDeque<SessionEvent>) {
        if self.paused {
            return;
        }
        match ball_speed {
            Some(speed) => {
                self.missing_report_logged = false;
                if speed < self.idle_speed {
                    self.idle_acc += 1;
                    if self.idle_acc >= self.inactivity_ticks {
                        info!("ball inactive for the full window, respawning");
                        self.respawn(out);
                    }
                } else {
                    self.idle_acc = 0;
                }
            }
            None => {
                // Rigid body missing or not reporting; degrade to a no-op
                if !self.missing_report_logged {
                    error!("no ball speed report; respawn watchdog idle");
                    self.missing_report_logged = true;
                }
            }
        }
    }

    /// Manual respawn request (button press)
    pub fn force_respawn(&mut self, out: &mut VecDeque<SessionEvent>) {
        if self.paused {
            warn!("respawn blocked while paused");
            out.push_back(SessionEvent::Message {
                text: "Game Paused".to_string(),
                color: MessageColor::Danger,
            });
            out.push_back(SessionEvent::Cue(Cue::Blocked));
            return;
        }
        self.respawn(out);
    }

    fn respawn(&mut self, out: &mut VecDeque<SessionEvent>) {
        self.idle_acc = 0;
        out.push_back(SessionEvent::RespawnBall);
        out.push_back(SessionEvent::Cue(Cue::Respawn));
        out.push_back(SessionEvent::Haptic {
            intensity: 0.4,
            millis: 120,
        });
        out.push_back(SessionEvent::Message {
            text: "Ball Ready".to_string(),
            color: MessageColor::Success,
        });
    }
}
