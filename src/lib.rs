//! Ballpop - a tap-to-clear arena physics mini-game
//!
//! Core modules:
//! - `sim`: Deterministic field simulation (physics, shots, game state)
//! - `highscores`: Best-score table keyed by session configuration
//!
//! Rendering, input normalization, and UI are the host's problem; the
//! engine only consumes field-space tap coordinates and a monotonic
//! millisecond clock.

pub mod highscores;
pub mod sim;

pub use highscores::BestScores;
pub use sim::{Ball, Field, FieldConfig, FieldPhase, Rect};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Downward acceleration, px per ms² (positive y is down)
    pub const GRAVITY: f32 = 0.0005;

    /// Shared ball radius, px
    pub const BALL_RADIUS: f32 = 30.0;
    /// Spawn speed upper bound, px per ms (exclusive)
    pub const BALL_MAX_SPAWN_SPEED: f32 = 0.2;
    /// Balls spawn only in this top fraction of the field height
    pub const SPAWN_BAND: f32 = 0.8;

    /// Warm-up pre-simulation: fixed step count and step size (ms).
    /// Exact values matter for reproducible initial layouts.
    pub const WARMUP_STEPS: u32 = 500;
    pub const WARMUP_DT: f32 = 20.0;

    /// Physics rate while aiming (Waiting state): near-frozen, not stopped
    pub const WAITING_TIME_SCALE: f64 = 0.01;

    /// Score weights
    pub const POINTS_PER_BALL: u64 = 1000;
    pub const POINTS_PER_SHOT: u64 = 100;

    /// Default session configuration
    pub const DEFAULT_BALL_COUNT: u32 = 30;
    pub const DEFAULT_SHOT_COUNT: u32 = 10;
    pub const DEFAULT_DURATION_MS: f64 = 30_000.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
