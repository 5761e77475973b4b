// =============================================================================
// Squeeze Signal — Short-squeeze likelihood scoring
// =============================================================================
//
// Library root.  `signals` is the pure scoring engine; everything else is the
// service built around it (validation, batch ranking, config, HTTP API).
// =============================================================================

pub mod api;
pub mod app_state;
pub mod batch;
pub mod runtime_config;
pub mod score_record;
pub mod signals;
pub mod types;
pub mod validation;
