// =============================================================================
// Central Application State — Squeeze Signal Server
// =============================================================================
//
// Shared across every request handler via `Arc<AppState>`.  The scoring
// engine itself is stateless; what lives here is configuration and the audit
// trail of recently served scores.
//
// Thread safety:
//   - Atomic counters for lock-free version tracking.
//   - parking_lot::RwLock for all mutable shared collections.
// =============================================================================

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::runtime_config::RuntimeConfig;
use crate::score_record::ScoreRecord;

/// Central application state shared across all async tasks via `Arc<AppState>`.
pub struct AppState {
    // ── Version tracking ────────────────────────────────────────────────
    /// Monotonically increasing version counter. Incremented whenever a
    /// score is recorded so pollers can tell when the recent list changed.
    pub state_version: AtomicU64,

    /// Total scores served since start-up, batch entries included.
    pub scores_served: AtomicU64,

    // ── Configuration ───────────────────────────────────────────────────
    pub runtime_config: Arc<RwLock<RuntimeConfig>>,

    // ── Score Audit Trail ───────────────────────────────────────────────
    pub recent_scores: RwLock<VecDeque<ScoreRecord>>,

    // ── Timing ──────────────────────────────────────────────────────────
    /// Instant when the server was started. Used for uptime calculations.
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Construct a new `AppState` from the given runtime configuration.
    pub fn new(config: RuntimeConfig) -> Self {
        let capacity = config.recent_scores_capacity;
        Self {
            state_version: AtomicU64::new(1),
            scores_served: AtomicU64::new(0),
            runtime_config: Arc::new(RwLock::new(config)),
            recent_scores: RwLock::new(VecDeque::with_capacity(capacity)),
            start_time: std::time::Instant::now(),
        }
    }

    // ── Version Management ──────────────────────────────────────────────

    /// Atomically increment the state version.
    pub fn increment_version(&self) -> u64 {
        self.state_version.fetch_add(1, Ordering::SeqCst)
    }

    /// Read the current state version without modifying it.
    pub fn current_state_version(&self) -> u64 {
        self.state_version.load(Ordering::SeqCst)
    }

    // ── Score Audit ─────────────────────────────────────────────────────

    /// Record a served score. The ring buffer is capped at the configured
    /// `recent_scores_capacity`; oldest entries are evicted first.
    pub fn push_score(&self, record: ScoreRecord) {
        let capacity = self.runtime_config.read().recent_scores_capacity;

        let mut scores = self.recent_scores.write();
        scores.push_back(record);
        while scores.len() > capacity {
            scores.pop_front();
        }
        drop(scores);

        self.record_served(1);
        self.increment_version();
    }

    /// Count scores served without recording them (batch results).
    pub fn record_served(&self, count: u64) {
        self.scores_served.fetch_add(count, Ordering::Relaxed);
    }

    /// Recorded scores, oldest first.
    pub fn recent_scores(&self) -> Vec<ScoreRecord> {
        self.recent_scores.read().iter().cloned().collect()
    }

    pub fn total_scores_served(&self) -> u64 {
        self.scores_served.load(Ordering::Relaxed)
    }

    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
