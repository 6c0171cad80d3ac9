//! Praxis Course Server - Main Entry Point
//! Serves the course catalog, chapter content, and the test runner API.

mod telemetry;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Import workspace crates
use praxis_api_http::run_gate::RunGate;
use praxis_api_http::{AppState, HttpServerConfig};
use praxis_core::application::CourseService;
use praxis_core::domain::CourseStructure;
use praxis_core::port::id_provider::UuidProvider;
use praxis_core::port::time_provider::SystemTimeProvider;
use praxis_infra_fs::FsChapterStore;
use praxis_infra_system::{RunnerConfig, SubprocessRunner, SystemProbeImpl};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_COURSE_ROOT: &str = "./course";
const DEFAULT_RUN_CONCURRENCY: usize = 2;

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.parse().ok())
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize logging (JSON format for production)
    let log_format = std::env::var("PRAXIS_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("praxis=info,tower_http=info"))
        .context("Failed to create env filter")?;

    match log_format.as_str() {
        "json" => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    info!("Praxis Course Server v{} starting...", VERSION);

    // 1.1. Initialize OpenTelemetry (optional)
    if let Err(e) = telemetry::init_telemetry() {
        tracing::warn!(error = ?e, "Failed to initialize OpenTelemetry (continuing without it)");
    }

    // 2. Load configuration
    let course_root = std::env::var("PRAXIS_COURSE_ROOT")
        .map(|p| shellexpand::tilde(&p).into_owned())
        .unwrap_or_else(|_| DEFAULT_COURSE_ROOT.to_string());

    let http_config = HttpServerConfig {
        port: env_parse("PRAXIS_HTTP_PORT").unwrap_or_else(|| HttpServerConfig::default().port),
        ..Default::default()
    };

    let mut runner_config = RunnerConfig::default();
    if let Some(timeout_ms) = env_parse("PRAXIS_TEST_TIMEOUT_MS") {
        runner_config.timeout_ms = timeout_ms;
    }

    let run_concurrency: usize =
        env_parse("PRAXIS_RUN_CONCURRENCY").unwrap_or(DEFAULT_RUN_CONCURRENCY);

    anyhow::ensure!(
        std::path::Path::new(&course_root).is_dir(),
        "Course root '{}' is not a directory (set PRAXIS_COURSE_ROOT)",
        course_root
    );

    info!(
        course_root = %course_root,
        timeout_ms = runner_config.timeout_ms,
        run_concurrency = run_concurrency,
        "Configuration loaded"
    );

    // 3. Setup dependencies (DI wiring)
    let time_provider = Arc::new(SystemTimeProvider);
    let id_provider = Arc::new(UuidProvider);

    let store = Arc::new(FsChapterStore::new(&course_root));
    let runner = Arc::new(SubprocessRunner::new(
        &course_root,
        runner_config,
        time_provider,
        id_provider,
    ));
    let probe = Arc::new(SystemProbeImpl::new());

    let service = CourseService::new(CourseStructure::standard(), store, runner);
    let state = Arc::new(AppState::new(service, probe, RunGate::new(run_concurrency)));

    // 4. Serve until ctrl-c
    info!("✅ Course ready. Press Ctrl+C to shutdown");

    praxis_api_http::serve(http_config, state, shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Shutdown complete.");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received. Exiting gracefully...");
}
