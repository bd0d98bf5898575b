//! Axis-aligned rectangle with derived edge accessors
//!
//! Origin + extent are the single source of truth; edges and center are
//! computed, never stored.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in field space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Left edge
    #[inline]
    pub fn min_x(&self) -> f32 {
        self.x
    }

    /// Right edge
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.w
    }

    /// Top edge
    #[inline]
    pub fn min_y(&self) -> f32 {
        self.y
    }

    /// Bottom edge
    #[inline]
    pub fn max_y(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Half-open containment test (left/top inclusive, right/bottom exclusive)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min_x() && p.x < self.max_x() && p.y >= self.min_y() && p.y < self.max_y()
    }
}
