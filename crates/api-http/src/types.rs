//! HTTP Response Types
//!
//! JSON shapes returned to the browser.

use serde::Serialize;

use praxis_core::application::course::ChapterView;
use praxis_core::domain::{ChapterMeta, DocumentFormat, RunReport, RunStatus, SourceFileInfo};

/// GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub cpu_usage_percent: f32,
    pub memory_used_mb: u64,
    pub memory_total_mb: u64,
}

/// GET /chapter/{slug}
#[derive(Debug, Clone, Serialize)]
pub struct ChapterResponse {
    pub meta: ChapterMeta,
    pub format: DocumentFormat,
    pub content: String,
}

impl From<ChapterView> for ChapterResponse {
    fn from(view: ChapterView) -> Self {
        Self {
            meta: view.meta,
            format: view.document.format,
            content: view.document.content,
        }
    }
}

/// GET /files/{slug}
#[derive(Debug, Clone, Serialize)]
pub struct FileListResponse {
    pub chapter: String,
    pub files: Vec<SourceFileInfo>,
}

/// GET /code/{slug}/{file}
#[derive(Debug, Clone, Serialize)]
pub struct CodeResponse {
    pub name: String,
    pub content: String,
}

/// POST /run-tests/{slug}
#[derive(Debug, Clone, Serialize)]
pub struct RunTestsResponse {
    pub run_id: String,
    pub chapter: String,
    pub status: RunStatus,
    pub success: bool,
    pub exit_code: Option<i32>,
    pub duration_ms: i64,
    pub stdout: String,
    pub stderr: String,
}

impl From<RunReport> for RunTestsResponse {
    fn from(report: RunReport) -> Self {
        let success = report.passed();
        Self {
            run_id: report.run_id,
            chapter: report.chapter.to_string(),
            status: report.status,
            success,
            exit_code: report.exit_code,
            duration_ms: report.duration_ms,
            stdout: report.stdout,
            stderr: report.stderr,
        }
    }
}
