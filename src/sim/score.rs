//! Pure scoring function
//!
//! One formula serves both per-shot scoring and the end-of-session clear
//! bonus; only the argument shape differs. Per shot: `(removed, 0, 0.0)`.
//! Clear bonus: `(0, rest_shots, rest_duration_ms)`.

use crate::consts::{POINTS_PER_BALL, POINTS_PER_SHOT};

/// `cleared * 1000 + rest_shots * 100 + ceil(rest_duration_ms / 1000)`
pub fn score(cleared_balls: u32, rest_shots: u32, rest_duration_ms: f64) -> u64 {
    cleared_balls as u64 * POINTS_PER_BALL
        + rest_shots as u64 * POINTS_PER_SHOT
        + (rest_duration_ms / 1000.0).ceil() as u64
}

/// Baseline best score for a fresh configuration, before any session has
/// been played.
pub fn par_score(ball_count: u32) -> u64 {
    score(0, ball_count, 0.0)
}
