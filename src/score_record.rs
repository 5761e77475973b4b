// =============================================================================
// Score Record — Auditable record of every served squeeze score
// =============================================================================

use serde::Serialize;

use crate::signals::{ComponentScore, SqueezeSignal};

/// A squeeze score as served to a client, with its breakdown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    /// Unique identifier for this score (UUID v4).
    pub id: String,

    pub symbol: String,

    /// Final score in [0, 100].
    pub score: f64,

    pub components: Vec<ComponentScore>,

    /// ISO 8601 timestamp of when the score was computed.
    pub scored_at: String,
}

impl ScoreRecord {
    /// Wrap a freshly computed signal for `symbol`.
    pub fn new(symbol: impl Into<String>, signal: SqueezeSignal) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            symbol: symbol.into(),
            score: signal.score,
            components: signal.components,
            scored_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
