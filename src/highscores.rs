//! Best-score table keyed by session configuration
//!
//! Each `(ball_count, shot_count, duration_ms)` variant keeps its own best
//! score, seeded with the par baseline until a session beats it. Persisted
//! to LocalStorage on wasm32.

use serde::{Deserialize, Serialize};

use crate::sim::score::par_score;
use crate::sim::state::FieldConfig;

/// One configuration's best score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestScoreEntry {
    pub ball_count: u32,
    pub shot_count: u32,
    pub duration_ms: f64,
    pub score: u64,
}

impl BestScoreEntry {
    fn matches(&self, config: &FieldConfig) -> bool {
        self.ball_count == config.ball_count
            && self.shot_count == config.shot_count
            && self.duration_ms == config.duration_ms
    }
}

/// Per-configuration best scores
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BestScores {
    pub entries: Vec<BestScoreEntry>,
}

impl BestScores {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "ballpop_best_scores";

    pub fn new() -> Self {
        Self::default()
    }

    /// Best score for a configuration; falls back to the par baseline when
    /// the variant has never been played
    pub fn best(&self, config: &FieldConfig) -> u64 {
        self.entries
            .iter()
            .find(|e| e.matches(config))
            .map(|e| e.score)
            .unwrap_or_else(|| par_score(config.ball_count))
    }

    /// Would this score set a new record for the configuration?
    pub fn is_record(&self, config: &FieldConfig, score: u64) -> bool {
        score > self.best(config)
    }

    /// Record a finished session. Returns true when it set a new record.
    pub fn record(&mut self, config: &FieldConfig, score: u64) -> bool {
        if !self.is_record(config, score) {
            return false;
        }
        if let Some(entry) = self.entries.iter_mut().find(|e| e.matches(config)) {
            entry.score = score;
        } else {
            self.entries.push(BestScoreEntry {
                ball_count: config.ball_count,
                shot_count: config.shot_count,
                duration_ms: config.duration_ms,
                score,
            });
        }
        true
    }

    /// Load from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(scores) = serde_json::from_str::<BestScores>(&json) {
                    log::info!("loaded {} best scores", scores.entries.len());
                    return scores;
                }
                log::warn!("best-score table corrupt, starting fresh");
            }
        }
        Self::new()
    }

    /// Save to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
