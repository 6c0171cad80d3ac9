//! Route Handlers
//!
//! One handler per endpoint, all JSON. Dependencies come in through
//! `AppState`; everything else is delegated to `CourseService`.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, State};
use axum::Json;

use praxis_core::application::CourseService;
use praxis_core::domain::CourseStructure;
use praxis_core::port::SystemProbe;

use crate::error::ApiError;
use crate::run_gate::RunGate;
use crate::types::{
    ChapterResponse, CodeResponse, FileListResponse, HealthResponse, RunTestsResponse,
};

/// Shared handler state (DI container for the HTTP layer)
pub struct AppState {
    pub service: CourseService,
    pub probe: Arc<dyn SystemProbe>,
    pub run_gate: RunGate,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(service: CourseService, probe: Arc<dyn SystemProbe>, run_gate: RunGate) -> Self {
        Self {
            service,
            probe,
            run_gate,
            started_at: Instant::now(),
        }
    }
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let metrics = state.probe.get_metrics().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        version: praxis_core::VERSION.to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        cpu_usage_percent: metrics.cpu_usage_percent,
        memory_used_mb: metrics.memory_used_mb,
        memory_total_mb: metrics.memory_total_mb,
    })
}

/// GET /course
pub async fn course(State(state): State<Arc<AppState>>) -> Json<CourseStructure> {
    Json(state.service.structure().clone())
}

/// GET /chapter/{slug}
pub async fn chapter(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<ChapterResponse>, ApiError> {
    let view = state.service.chapter(&slug).await?;
    Ok(Json(view.into()))
}

/// GET /files/{slug}
pub async fn list_files(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<FileListResponse>, ApiError> {
    let files = state.service.list_files(&slug).await?;
    Ok(Json(FileListResponse {
        chapter: slug,
        files,
    }))
}

/// GET /code/{slug}/{file}
pub async fn code(
    State(state): State<Arc<AppState>>,
    Path((slug, file)): Path<(String, String)>,
) -> Result<Json<CodeResponse>, ApiError> {
    let source = state.service.source_file(&slug, &file).await?;
    Ok(Json(CodeResponse {
        name: source.name.to_string(),
        content: source.content,
    }))
}

/// POST /run-tests/{slug}
pub async fn run_tests(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<RunTestsResponse>, ApiError> {
    // Hold the slot for the whole run
    let _permit = state.run_gate.try_acquire().ok_or(ApiError::Busy)?;

    let report = state.service.run_tests(&slug).await?;
    Ok(Json(report.into()))
}
