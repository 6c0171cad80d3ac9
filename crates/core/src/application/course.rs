// Course Service
// Orchestrates catalog lookup, document loading, and test runs over the
// ports. Everything user-supplied is validated here before an adapter
// sees it; unknown chapters surface as NotFound regardless of which
// adapter noticed first.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{
    ChapterDocument, ChapterMeta, ChapterSlug, CourseStructure, FileName, RunReport, SourceFile,
    SourceFileInfo,
};
use crate::error::{AppError, Result};
use crate::port::{ChapterStore, RunnerError, StoreError, TestRunner};

/// A chapter document joined with its catalog metadata
#[derive(Debug, Clone)]
pub struct ChapterView {
    pub meta: ChapterMeta,
    pub document: ChapterDocument,
}

/// Course service with injected dependencies
pub struct CourseService {
    catalog: CourseStructure,
    store: Arc<dyn ChapterStore>,
    runner: Arc<dyn TestRunner>,
}

impl CourseService {
    pub fn new(
        catalog: CourseStructure,
        store: Arc<dyn ChapterStore>,
        runner: Arc<dyn TestRunner>,
    ) -> Self {
        Self {
            catalog,
            store,
            runner,
        }
    }

    /// The static course structure
    pub fn structure(&self) -> &CourseStructure {
        &self.catalog
    }

    /// Parse and validate a raw slug, then require it to be cataloged
    fn resolve(&self, raw_slug: &str) -> Result<(ChapterSlug, ChapterMeta)> {
        let slug = ChapterSlug::new(raw_slug)?;
        let meta = self
            .catalog
            .find(&slug)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Chapter '{}' not found", slug)))?;
        Ok((slug, meta))
    }

    /// Load a chapter document with its catalog metadata
    pub async fn chapter(&self, raw_slug: &str) -> Result<ChapterView> {
        let (slug, meta) = self.resolve(raw_slug)?;

        let document = self
            .store
            .load_document(&slug)
            .await
            .map_err(map_store_not_found)?;

        Ok(ChapterView { meta, document })
    }

    /// Read one source file from a chapter
    pub async fn source_file(&self, raw_slug: &str, raw_name: &str) -> Result<SourceFile> {
        let (slug, _meta) = self.resolve(raw_slug)?;
        let name = FileName::new(raw_name)?;

        self.store
            .read_source_file(&slug, &name)
            .await
            .map_err(map_store_not_found)
    }

    /// List servable files in a chapter's source directory
    pub async fn list_files(&self, raw_slug: &str) -> Result<Vec<SourceFileInfo>> {
        let (slug, _meta) = self.resolve(raw_slug)?;

        self.store
            .list_source_files(&slug)
            .await
            .map_err(map_store_not_found)
    }

    /// Run the chapter's test suite
    ///
    /// A cataloged chapter whose source directory is missing on disk is a
    /// NotFound, not a spawn error.
    pub async fn run_tests(&self, raw_slug: &str) -> Result<RunReport> {
        let (slug, meta) = self.resolve(raw_slug)?;

        info!(chapter = %slug, name = %meta.name, "Running chapter tests");

        let report = self.runner.run(&slug).await.map_err(|e| match e {
            RunnerError::ChapterNotFound(s) => {
                AppError::NotFound(format!("Chapter '{}' has no source directory", s))
            }
            other => AppError::Runner(other),
        })?;

        if !report.passed() {
            warn!(
                chapter = %slug,
                exit_code = ?report.exit_code,
                "Chapter tests failed"
            );
        }

        Ok(report)
    }
}

fn map_store_not_found(err: StoreError) -> AppError {
    match err {
        StoreError::ChapterNotFound(s) => AppError::NotFound(format!("Chapter '{}' not found", s)),
        StoreError::FileNotFound(f) => AppError::NotFound(format!("File '{}' not found", f)),
        other => AppError::Store(other),
    }
}
