// =============================================================================
// REST API Endpoints — Axum 0.7
// =============================================================================
//
// All endpoints live under `/api/v1/`.  Scoring is CPU-bound: single scores
// run inline (microseconds), batches are moved onto a blocking worker so the
// async runtime keeps serving health checks while a watchlist is ranked.
//
// CORS is configured permissively for the dashboard in development.
// =============================================================================

use std::sync::Arc;

use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};

use crate::api::error::ApiError;
use crate::app_state::AppState;
use crate::batch::{score_batch, BatchOutcome, ScoreRequest};
use crate::score_record::ScoreRecord;
use crate::signals::{decay, score_breakdown};
use crate::validation::{validate_input, validate_symbol};

// =============================================================================
// Router construction
// =============================================================================

/// Build the full REST API router with CORS middleware and shared state.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/squeeze-signal", post(squeeze_signal))
        .route("/api/v1/squeeze-signal/batch", post(squeeze_signal_batch))
        .route("/api/v1/scores/recent", get(recent_scores))
        .layer(cors)
        .with_state(state)
}

// =============================================================================
// Health
// =============================================================================

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    state_version: u64,
    scores_served: u64,
    uptime_secs: u64,
    server_time: i64,
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        state_version: state.current_state_version(),
        scores_served: state.total_scores_served(),
        uptime_secs: state.uptime_secs(),
        server_time: chrono::Utc::now().timestamp_millis(),
    })
}

// =============================================================================
// Single score
// =============================================================================

async fn squeeze_signal(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreRecord>, ApiError> {
    validate_symbol(&request.symbol)?;
    validate_input(&request.input)?;

    let signal = score_breakdown(&request.input, decay::now_ms());
    let record = ScoreRecord::new(request.symbol, signal);

    info!(
        id = %record.id,
        symbol = %record.symbol,
        score = record.score,
        "squeeze signal scored"
    );

    state.push_score(record.clone());
    Ok(Json(record))
}

// =============================================================================
// Batch
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchRequest {
    requests: Vec<ScoreRequest>,
    #[serde(default)]
    min_score: Option<f64>,
}

async fn squeeze_signal_batch(
    State(state): State<Arc<AppState>>,
    Json(batch): Json<BatchRequest>,
) -> Result<Json<BatchOutcome>, ApiError> {
    let limit = state.runtime_config.read().max_batch_size;
    let size = batch.requests.len();
    if size > limit {
        return Err(ApiError::BatchTooLarge { size, limit });
    }

    let now_ms = decay::now_ms();
    let min_score = batch.min_score;
    let outcome =
        tokio::task::spawn_blocking(move || score_batch(&batch.requests, now_ms, min_score))
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?;

    info!(
        size,
        ranked = outcome.ranked.len(),
        rejected = outcome.rejected.len(),
        "batch scored"
    );

    state.record_served(outcome.ranked.len() as u64);
    Ok(Json(outcome))
}

// =============================================================================
// Recent scores
// =============================================================================

async fn recent_scores(State(state): State<Arc<AppState>>) -> Json<Vec<ScoreRecord>> {
    let scores = state.recent_scores();
    debug!(count = scores.len(), "recent scores requested");
    Json(scores)
}
