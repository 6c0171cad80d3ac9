// Chapter Store Port
// Abstraction for loading chapter documents and source files.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ChapterDocument, ChapterSlug, FileName, SourceFile, SourceFileInfo};

/// Store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Chapter not found: {0}")]
    ChapterNotFound(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Chapter store trait
///
/// Implementations:
/// - FsChapterStore: reads from the course directory on disk
#[async_trait]
pub trait ChapterStore: Send + Sync {
    /// Load a chapter's narrative document
    ///
    /// # Errors
    /// - StoreError::ChapterNotFound if no document exists for the slug
    async fn load_document(&self, slug: &ChapterSlug) -> Result<ChapterDocument, StoreError>;

    /// Read a single source file from a chapter's directory
    ///
    /// # Errors
    /// - StoreError::ChapterNotFound if the chapter directory is missing
    /// - StoreError::FileNotFound if the file is missing
    async fn read_source_file(
        &self,
        slug: &ChapterSlug,
        name: &FileName,
    ) -> Result<SourceFile, StoreError>;

    /// List servable files in a chapter's source directory
    async fn list_source_files(&self, slug: &ChapterSlug)
        -> Result<Vec<SourceFileInfo>, StoreError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::domain::DocumentFormat;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory chapter store for testing
    pub struct MockChapterStore {
        documents: Mutex<HashMap<String, ChapterDocument>>,
        files: Mutex<HashMap<String, Vec<SourceFile>>>,
    }

    impl MockChapterStore {
        pub fn new() -> Self {
            Self {
                documents: Mutex::new(HashMap::new()),
                files: Mutex::new(HashMap::new()),
            }
        }

        pub fn with_document(self, slug: &ChapterSlug, content: &str) -> Self {
            self.documents.lock().unwrap().insert(
                slug.as_str().to_string(),
                ChapterDocument {
                    slug: slug.clone(),
                    format: DocumentFormat::Markdown,
                    content: content.to_string(),
                },
            );
            self
        }

        pub fn with_file(self, slug: &ChapterSlug, name: &str, content: &str) -> Self {
            self.files
                .lock()
                .unwrap()
                .entry(slug.as_str().to_string())
                .or_default()
                .push(SourceFile {
                    name: FileName::new(name).unwrap(),
                    content: content.to_string(),
                });
            self
        }
    }

    impl Default for MockChapterStore {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl ChapterStore for MockChapterStore {
        async fn load_document(&self, slug: &ChapterSlug) -> Result<ChapterDocument, StoreError> {
            self.documents
                .lock()
                .unwrap()
                .get(slug.as_str())
                .cloned()
                .ok_or_else(|| StoreError::ChapterNotFound(slug.to_string()))
        }

        async fn read_source_file(
            &self,
            slug: &ChapterSlug,
            name: &FileName,
        ) -> Result<SourceFile, StoreError> {
            let files = self.files.lock().unwrap();
            let chapter_files = files
                .get(slug.as_str())
                .ok_or_else(|| StoreError::ChapterNotFound(slug.to_string()))?;
            chapter_files
                .iter()
                .find(|f| f.name == *name)
                .cloned()
                .ok_or_else(|| StoreError::FileNotFound(name.to_string()))
        }

        async fn list_source_files(
            &self,
            slug: &ChapterSlug,
        ) -> Result<Vec<SourceFileInfo>, StoreError> {
            let files = self.files.lock().unwrap();
            let chapter_files = files
                .get(slug.as_str())
                .ok_or_else(|| StoreError::ChapterNotFound(slug.to_string()))?;
            Ok(chapter_files
                .iter()
                .map(|f| SourceFileInfo {
                    name: f.name.to_string(),
                    size_bytes: f.content.len() as u64,
                    modified_ms: 0,
                })
                .collect())
        }
    }
}
