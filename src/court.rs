//! Court rigging: hoop elevation and game-mode switching

use std::fmt;

use serde::{Deserialize, Serialize};

/// How the court is being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Casual shooting, no clock
    #[default]
    Freestyle,
    /// Timed match run by the match controller
    Timed,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Freestyle => write!(f, "Freestyle"),
            Self::Timed => write!(f, "Timed"),
        }
    }
}

/// Flips between the two modes and reports the active one
#[derive(Debug, Default)]
pub struct ModeSwitcher {
    mode: GameMode,
}

impl ModeSwitcher {
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn toggle(&mut self) -> GameMode {
        self.mode = match self.mode {
            GameMode::Freestyle => GameMode::Timed,
            GameMode::Timed => GameMode::Freestyle,
        };
        self.mode
    }
}

/// Steps the hoop up and down within a clamped height range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoopElevator {
    height: f32,
    step: f32,
    min_height: f32,
    max_height: f32,
}

impl Default for HoopElevator {
    fn default() -> Self {
        Self::new(3.05, 0.5, 1.0, 5.0)
    }
}

impl HoopElevator {
    pub fn new(height: f32, step: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            height: height.clamp(min_height, max_height),
            step,
            min_height,
            max_height,
        }
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Raise the hoop one step; returns the new height
    pub fn move_up(&mut self) -> f32 {
        self.height = (self.height + self.step).clamp(self.min_height, self.max_height);
        self.height
    }

    /// Lower the hoop one step; returns the new height
    pub fn move_down(&mut self) -> f32 {
        self.height = (self.height - self.step).clamp(self.min_height, self.max_height);
        self.height
    }

    /// Label for the height display
    pub fn height_label(&self) -> String {
        format!("Height: {:.2}m", self.height)
    }
}
