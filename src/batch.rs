// =============================================================================
// Batch Scoring — Validate, score and rank a watchlist in one pass
// =============================================================================
//
// Each request is validated independently; a bad record is reported back
// instead of failing the whole batch.  Survivors below the caller's minimum
// squeeze score are filtered out and the rest ranked best-first.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::signals::{score_breakdown, SqueezeSignal};
use crate::types::SqueezeSignalInput;
use crate::validation::{validate_input, validate_symbol, ValidationError};

/// One stock to score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub symbol: String,
    pub input: SqueezeSignalInput,
}

/// A scored stock and its position in the ranking (1 = strongest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedScore {
    pub rank: usize,
    pub symbol: String,
    #[serde(flatten)]
    pub signal: SqueezeSignal,
}

/// A request that failed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedRequest {
    pub symbol: String,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl RejectedRequest {
    fn new(symbol: &str, err: ValidationError) -> Self {
        Self {
            symbol: symbol.to_string(),
            error: err.message,
            field: err.field,
        }
    }
}

/// Result of [`score_batch`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub ranked: Vec<RankedScore>,
    pub rejected: Vec<RejectedRequest>,
}

/// Validate and score every request as of `now_ms`, drop scores below
/// `min_score`, and rank the rest by score (ties broken by symbol).
pub fn score_batch(
    requests: &[ScoreRequest],
    now_ms: i64,
    min_score: Option<f64>,
) -> BatchOutcome {
    let mut scored: Vec<(String, SqueezeSignal)> = Vec::with_capacity(requests.len());
    let mut rejected = Vec::new();

    for request in requests {
        let checked = validate_symbol(&request.symbol).and_then(|_| validate_input(&request.input));
        match checked {
            Ok(()) => {
                let signal = score_breakdown(&request.input, now_ms);
                scored.push((request.symbol.clone(), signal));
            }
            Err(err) => {
                debug!(symbol = %request.symbol, error = %err, "batch entry rejected");
                rejected.push(RejectedRequest::new(&request.symbol, err));
            }
        }
    }

    if let Some(min) = min_score {
        scored.retain(|(_, signal)| signal.score >= min);
    }

    scored.sort_by(|(sym_a, a), (sym_b, b)| {
        b.score.total_cmp(&a.score).then_with(|| sym_a.cmp(sym_b))
    });

    let ranked = scored
        .into_iter()
        .enumerate()
        .map(|(i, (symbol, signal))| RankedScore {
            rank: i + 1,
            symbol,
            signal,
        })
        .collect();

    BatchOutcome { ranked, rejected }
}
