// =============================================================================
// Squeeze Signal Server — Main Entry Point
// =============================================================================
//
// Loads configuration, starts structured logging and serves the scoring API
// until Ctrl+C.  The config file is written back on shutdown so a fresh
// install gets a fully populated `squeeze_config.json`.
// =============================================================================

use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use squeeze_signal::api;
use squeeze_signal::app_state::AppState;
use squeeze_signal::runtime_config::{LogFormat, RuntimeConfig, DEFAULT_CONFIG_PATH};

fn init_logging(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stdout))
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(true).with_ansi(true).with_writer(std::io::stdout))
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    // The subscriber format comes from the config, so loading happens before
    // logging is up and any failure is reported right after.
    let loaded = RuntimeConfig::load(DEFAULT_CONFIG_PATH);
    let (mut config, load_error) = match loaded {
        Ok(cfg) => (cfg, None),
        Err(e) => (RuntimeConfig::default(), Some(e)),
    };
    config.apply_env_overrides()?;

    init_logging(config.log_format);

    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load config, using defaults");
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_addr = %config.bind_addr,
        max_batch_size = config.max_batch_size,
        recent_scores_capacity = config.recent_scores_capacity,
        log_format = %config.log_format,
        "Squeeze signal server starting"
    );

    // ── 2. Build shared state ────────────────────────────────────────────
    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(config));

    // ── 3. Serve the REST API ────────────────────────────────────────────
    let app = api::rest::router(state.clone());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!(addr = %bind_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for shutdown signal");
            }
            warn!("Shutdown signal received, stopping gracefully");
        })
        .await
        .context("REST API server error")?;

    // ── 4. Persist config ────────────────────────────────────────────────
    if let Err(e) = state.runtime_config.read().save(DEFAULT_CONFIG_PATH) {
        error!(error = %e, "Failed to save runtime config on shutdown");
    }

    info!(
        scores_served = state.total_scores_served(),
        "Squeeze signal server shut down complete."
    );
    Ok(())
}
