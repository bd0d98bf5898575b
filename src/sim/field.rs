//! The field engine: ball ownership, physics integration, shot resolution,
//! and the session state machine.
//!
//! Externally driven: the host calls `init`, `start`, `on_pointer_down`,
//! and `tick` to completion, one at a time. The engine never schedules or
//! blocks on its own.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::score::score;
use super::state::{Ball, BallColor, FieldConfig, FieldPhase, Mark, SessionOutcome};
use crate::consts::*;
use crate::polar_to_cartesian;

/// The owning simulation context: bounds, balls, gravity, budgets, state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    /// Bounding rectangle, immutable after construction
    pub bounds: Rect,
    /// Session seed; `init` reseeds from this so a (seed, config) pair
    /// reproduces the exact warmed-up layout
    pub seed: u64,
    /// Downward acceleration, px/ms²
    pub gravity: f32,
    /// Shared radius of every ball in this field
    pub ball_radius: f32,
    /// Configuration of the current session
    pub config: FieldConfig,
    /// Active balls, in spawn order
    pub balls: Vec<Ball>,
    /// Balls cleared by the most recent shot; emptied on pause
    pub removed_balls: Vec<Ball>,
    /// Outcome annotation for the most recent shot
    pub mark: Mark,
    /// Remaining shots
    pub rest_shot_count: u32,
    /// Remaining time budget, ms
    pub rest_duration: f64,
    /// Accumulated score, non-decreasing
    pub score: u64,
    pub phase: FieldPhase,
    last_tick_time: f64,
}

impl Field {
    pub fn new(bounds: Rect, seed: u64) -> Self {
        Self {
            bounds,
            seed,
            gravity: GRAVITY,
            ball_radius: BALL_RADIUS,
            config: FieldConfig::default(),
            balls: Vec::new(),
            removed_balls: Vec::new(),
            mark: Mark::default(),
            rest_shot_count: 0,
            rest_duration: 0.0,
            score: 0,
            phase: FieldPhase::Ready,
            last_tick_time: 0.0,
        }
    }

    /// (Re)configure the session and settle the layout.
    ///
    /// Spawns `config.ball_count` balls at uniform random positions in the
    /// top band of the field, with uniform random speed and heading, then
    /// runs the fixed warm-up so the visible starting configuration is
    /// already spread out. Warm-up drives only the integrator; score and
    /// budgets are untouched by it.
    pub fn init(&mut self, config: FieldConfig) {
        let mut rng = Pcg32::seed_from_u64(self.seed);
        self.config = config;
        self.rest_shot_count = config.shot_count;
        self.rest_duration = config.duration_ms;
        self.score = 0;
        self.gravity = GRAVITY;
        self.ball_radius = BALL_RADIUS;
        self.balls = Vec::with_capacity(config.ball_count as usize);
        for i in 0..config.ball_count {
            let pos = Vec2::new(
                self.bounds.x + self.bounds.w * rng.random::<f32>(),
                self.bounds.y + self.bounds.h * rng.random::<f32>() * SPAWN_BAND,
            );
            let speed = BALL_MAX_SPAWN_SPEED * rng.random::<f32>();
            let angle = std::f32::consts::TAU * rng.random::<f32>();
            self.balls.push(Ball::new(
                pos,
                polar_to_cartesian(speed, angle),
                BallColor::for_spawn_index(i),
            ));
        }
        for _ in 0..WARMUP_STEPS {
            self.tick_balls(WARMUP_DT);
        }
        self.removed_balls.clear();
        self.mark = Mark::default();
        self.phase = FieldPhase::Ready;
        log::info!(
            "field ready: {} balls, {} shots, {:.0} ms",
            config.ball_count,
            config.shot_count,
            config.duration_ms
        );
    }

    /// Begin the session clock. Ready -> Running.
    pub fn start(&mut self, start_time_ms: f64) {
        self.last_tick_time = start_time_ms;
        self.phase = FieldPhase::Running;
    }

    /// Tap in field coordinates.
    ///
    /// Running with two or more balls: enter aim mode. Running with the
    /// final ball: auto-fire. Waiting: fire at the tap point. Ignored once
    /// shots are spent or the session is over.
    pub fn on_pointer_down(&mut self, p: Vec2) {
        if self.rest_shot_count == 0 {
            return;
        }
        match self.phase {
            FieldPhase::Running => {
                self.pause();
                if self.balls.len() <= 1 {
                    self.shoot(p);
                }
            }
            FieldPhase::Waiting => self.shoot(p),
            FieldPhase::Ready | FieldPhase::Finished => {}
        }
    }

    /// Enter aim mode, discarding the previous shot's transient leftovers
    pub fn pause(&mut self) {
        self.removed_balls.clear();
        self.mark.clear();
        self.phase = FieldPhase::Waiting;
    }

    /// Execute a shot at `p`: remove every ball whose center lies within
    /// one ball radius, score it, and resolve the session outcome.
    fn shoot(&mut self, p: Vec2) {
        let rr = self.ball_radius * self.ball_radius;
        // Reverse scan so in-place removal cannot skip entries
        for i in (0..self.balls.len()).rev() {
            if (p - self.balls[i].pos).length_squared() > rr {
                continue;
            }
            let mut ball = self.balls.remove(i);
            ball.mark_removed();
            self.removed_balls.push(ball);
        }
        // pause() emptied the list before every shot path, so its length
        // is exactly this shot's removals
        let removed = self.removed_balls.len() as u32;
        self.score += score(removed, 0, 0.0);
        self.mark.pos = p;
        self.mark.removed = Some(removed);
        self.rest_shot_count -= 1;
        log::debug!(
            "shot at ({:.1}, {:.1}): {} removed, {} balls and {} shots left",
            p.x,
            p.y,
            removed,
            self.balls.len(),
            self.rest_shot_count
        );
        if self.balls.is_empty() {
            self.score += score(0, self.rest_shot_count, self.rest_duration);
            self.phase = FieldPhase::Finished;
            log::info!("field cleared, final score {}", self.score);
            return;
        }
        if self.rest_shot_count == 0 {
            self.phase = FieldPhase::Finished;
            log::info!("out of shots, final score {}", self.score);
            return;
        }
        if self.balls.len() == 1 {
            // Auto-fire cue: the last ball goes neutral
            self.balls[0].color = BallColor::Neutral;
        }
        self.phase = FieldPhase::Running;
    }

    /// Advance one frame. Returns false exactly when the session has just
    /// become, or already is, Finished.
    pub fn tick(&mut self, tick_time_ms: f64) -> bool {
        if self.phase == FieldPhase::Finished {
            return false;
        }
        let mut dt = tick_time_ms - self.last_tick_time;
        self.last_tick_time = tick_time_ms;
        self.rest_duration -= dt;
        if self.rest_duration <= 0.0 {
            self.rest_duration = 0.0;
            self.phase = FieldPhase::Finished;
            log::info!("time up, final score {}", self.score);
            return false;
        }
        if self.phase == FieldPhase::Waiting {
            dt *= WAITING_TIME_SCALE;
        }
        // Speed up as the field empties: 1x at full count, toward 3x empty
        let speedup = 3.0 - 2.0 * self.balls.len() as f64 / self.config.ball_count as f64;
        self.tick_balls((dt * speedup) as f32);
        true
    }

    /// One integrator step over every active ball.
    ///
    /// Boundary reflection mirrors the center about the wall (preserving
    /// the overshoot distance) and flips the velocity component; perfectly
    /// elastic. The top edge is open: gravity is the only ceiling.
    pub fn tick_balls(&mut self, dt: f32) {
        let min_x = self.bounds.min_x();
        let max_x = self.bounds.max_x();
        let max_y = self.bounds.max_y();
        for ball in &mut self.balls {
            ball.pos.x += ball.vel.x * dt;
            if ball.pos.x < min_x {
                ball.pos.x = 2.0 * min_x - ball.pos.x;
                ball.vel.x = -ball.vel.x;
            } else if ball.pos.x > max_x {
                ball.pos.x = 2.0 * max_x - ball.pos.x;
                ball.vel.x = -ball.vel.x;
            }
            ball.vel.y += self.gravity * dt;
            ball.pos.y += ball.vel.y * dt;
            if ball.pos.y > max_y {
                ball.pos.y = 2.0 * max_y - ball.pos.y;
                ball.vel.y = -ball.vel.y;
            }
        }
    }

    /// How a Finished session ended; None while still live
    pub fn outcome(&self) -> Option<SessionOutcome> {
        if self.phase != FieldPhase::Finished {
            return None;
        }
        Some(if self.balls.is_empty() {
            SessionOutcome::Completed
        } else if self.rest_duration <= 0.0 {
            SessionOutcome::TimesUp
        } else {
            SessionOutcome::OutOfShots
        })
    }
}
