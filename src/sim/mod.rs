//! Deterministic field simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (spawn order; shots scan in reverse)
//! - No rendering or platform dependencies

pub mod field;
pub mod rect;
pub mod score;
pub mod state;

pub use field::Field;
pub use rect::Rect;
pub use score::{par_score, score};
pub use state::{Ball, BallColor, FieldConfig, FieldPhase, FillStyle, Mark, SessionOutcome};
