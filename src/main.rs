//! Ballpop demo host
//!
//! Headless autoplay session against a synthetic 60 Hz clock: aims each
//! shot at the ball with the most neighbors in tap range, then reports the
//! session outcome and best-score standing.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use ballpop::sim::{Field, FieldConfig, FieldPhase, Rect, SessionOutcome};
    use ballpop::BestScores;
    use glam::Vec2;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Center of the ball with the most neighbors within tap range
    fn pick_target(field: &Field) -> Vec2 {
        let rr = field.ball_radius * field.ball_radius;
        field
            .balls
            .iter()
            .map(|ball| {
                let hits = field
                    .balls
                    .iter()
                    .filter(|other| (other.pos - ball.pos).length_squared() <= rr)
                    .count();
                (ball.pos, hits)
            })
            .max_by_key(|&(_, hits)| hits)
            .map(|(pos, _)| pos)
            .unwrap_or_else(|| field.bounds.center())
    }

    pub fn run() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();

        let seed = std::env::args()
            .nth(1)
            .and_then(|s| s.parse().ok())
            .unwrap_or(42u64);

        let config = FieldConfig::default();
        let mut best = BestScores::load();
        log::info!("seed {}, best score to beat: {}", seed, best.best(&config));

        let mut field = Field::new(Rect::new(30.0, 50.0, 300.0, 300.0), seed);
        field.init(config);
        field.start(0.0);

        let mut now = 0.0;
        let mut last_shot_at = 0.0;
        while field.tick(now) {
            if now - last_shot_at > 1500.0 {
                match field.phase {
                    // First tap aims (or auto-fires on the final ball)
                    FieldPhase::Running => field.on_pointer_down(pick_target(&field)),
                    // Second tap fires
                    FieldPhase::Waiting => {
                        field.on_pointer_down(pick_target(&field));
                        last_shot_at = now;
                    }
                    _ => {}
                }
            }
            now += FRAME_MS;
        }

        let outcome = match field.outcome() {
            Some(SessionOutcome::Completed) => "completed",
            Some(SessionOutcome::TimesUp) => "time's up",
            Some(SessionOutcome::OutOfShots) => "out of bullets",
            None => unreachable!("loop exits only once finished"),
        };
        log::info!(
            "{}: score {} with {} balls left after {:.1}s",
            outcome,
            field.score,
            field.balls.len(),
            now / 1000.0
        );
        if best.record(&config, field.score) {
            log::info!("new record!");
            best.save();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {}
