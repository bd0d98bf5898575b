//! Core simulation entity types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Ball palette: one neutral color plus three shot colors.
///
/// Spawn colors cycle through the shot colors; `Neutral` marks the final
/// remaining ball (auto-fire cue) and the shot-outcome text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallColor {
    Neutral,
    Red,
    Green,
    Blue,
}

impl BallColor {
    /// Spawn color for the ball at the given spawn index
    pub fn for_spawn_index(i: u32) -> Self {
        match i % 3 {
            0 => BallColor::Red,
            1 => BallColor::Green,
            _ => BallColor::Blue,
        }
    }
}

/// How a ball renders: filled while live, outlined once cleared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillStyle {
    Filled,
    Outlined,
}

/// A moving disc. All balls in a field share one radius, stored on the field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    /// Disc center, field space
    pub pos: Vec2,
    /// px per ms
    pub vel: Vec2,
    pub color: BallColor,
    pub style: FillStyle,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, color: BallColor) -> Self {
        Self {
            pos,
            vel,
            color,
            style: FillStyle::Filled,
        }
    }

    /// Swap fill for stroke: the ghost look of a just-cleared ball
    pub fn mark_removed(&mut self) {
        self.style = FillStyle::Outlined;
    }
}

/// Transient annotation reporting the outcome of the last shot.
/// Purely informational; never touches the physics.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Mark {
    /// Last tap position
    pub pos: Vec2,
    /// Balls removed by that tap; `None` when cleared (on resume)
    pub removed: Option<u32>,
}

impl Mark {
    pub fn clear(&mut self) {
        self.removed = None;
    }
}

/// Field state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldPhase {
    /// Initialized and warmed up, not yet started
    Ready,
    /// Physics at full rate, taps live
    Running,
    /// Aiming: physics at 1% rate, next tap shoots
    Waiting,
    /// Terminal: cleared, out of shots, or out of time
    Finished,
}

/// Session configuration: the tuple that identifies a game variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub ball_count: u32,
    pub shot_count: u32,
    pub duration_ms: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            ball_count: DEFAULT_BALL_COUNT,
            shot_count: DEFAULT_SHOT_COUNT,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

/// How a finished session ended, for the host's result screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every ball cleared
    Completed,
    /// Duration exhausted with balls left
    TimesUp,
    /// Shots exhausted with balls left
    OutOfShots,
}
