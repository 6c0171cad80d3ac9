// Filesystem chapter store
// Course layout on disk:
//   <course_root>/content/<slug>.html   pre-rendered document (optional)
//   <course_root>/source/<slug>/        exercise package with README.md

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use praxis_core::domain::{
    ChapterDocument, ChapterSlug, DocumentFormat, FileName, SourceFile, SourceFileInfo,
    SERVABLE_EXTENSIONS,
};
use praxis_core::port::{ChapterStore, StoreError};

/// Chapter store backed by the course directory
pub struct FsChapterStore {
    course_root: PathBuf,
}

impl FsChapterStore {
    pub fn new(course_root: impl Into<PathBuf>) -> Self {
        Self {
            course_root: course_root.into(),
        }
    }

    fn content_path(&self, slug: &ChapterSlug) -> PathBuf {
        self.course_root
            .join("content")
            .join(format!("{}.html", slug))
    }

    fn source_dir(&self, slug: &ChapterSlug) -> PathBuf {
        self.course_root.join("source").join(slug.as_str())
    }

    async fn read_to_string(path: &Path) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(format!("{}: {}", path.display(), e))),
        }
    }
}

#[async_trait]
impl ChapterStore for FsChapterStore {
    async fn load_document(&self, slug: &ChapterSlug) -> Result<ChapterDocument, StoreError> {
        // Pre-rendered content wins over the chapter README
        let content_path = self.content_path(slug);
        if let Some(content) = Self::read_to_string(&content_path).await? {
            debug!(chapter = %slug, path = %content_path.display(), "Loaded pre-rendered document");
            return Ok(ChapterDocument {
                slug: slug.clone(),
                format: DocumentFormat::Html,
                content,
            });
        }

        let readme_path = self.source_dir(slug).join("README.md");
        match Self::read_to_string(&readme_path).await? {
            Some(content) => {
                debug!(chapter = %slug, path = %readme_path.display(), "Loaded chapter README");
                Ok(ChapterDocument {
                    slug: slug.clone(),
                    format: DocumentFormat::Markdown,
                    content,
                })
            }
            None => Err(StoreError::ChapterNotFound(slug.to_string())),
        }
    }

    async fn read_source_file(
        &self,
        slug: &ChapterSlug,
        name: &FileName,
    ) -> Result<SourceFile, StoreError> {
        let dir = self.source_dir(slug);
        match fs::metadata(&dir).await {
            Ok(m) if m.is_dir() => {}
            _ => return Err(StoreError::ChapterNotFound(slug.to_string())),
        }

        let path = dir.join(name.as_str());
        match Self::read_to_string(&path).await? {
            Some(content) => Ok(SourceFile {
                name: name.clone(),
                content,
            }),
            None => Err(StoreError::FileNotFound(name.to_string())),
        }
    }

    async fn list_source_files(
        &self,
        slug: &ChapterSlug,
    ) -> Result<Vec<SourceFileInfo>, StoreError> {
        let dir = self.source_dir(slug);

        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::ChapterNotFound(slug.to_string()));
            }
            Err(e) => return Err(StoreError::Io(format!("{}: {}", dir.display(), e))),
        };

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?
        {
            let path = entry.path();
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if !SERVABLE_EXTENSIONS.contains(&ext) {
                continue;
            }

            // Unreadable metadata skips the entry, it does not fail the listing
            let metadata = match entry.metadata().await {
                Ok(m) if m.is_file() => m,
                Ok(_) => continue,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable entry");
                    continue;
                }
            };

            let modified_ms = metadata
                .modified()
                .ok()
                .map(|t| chrono::DateTime::<chrono::Utc>::from(t).timestamp_millis())
                .unwrap_or(0);

            files.push(SourceFileInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                size_bytes: metadata.len(),
                modified_ms,
            });
        }

        // Stable output order for the viewer
        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(s: &str) -> ChapterSlug {
        ChapterSlug::new(s).unwrap()
    }

    async fn fixture() -> (tempfile::TempDir, FsChapterStore) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        fs::create_dir_all(root.join("source/integers/src"))
            .await
            .unwrap();
        fs::write(root.join("source/integers/README.md"), "# Integers\n")
            .await
            .unwrap();
        fs::write(root.join("source/integers/Cargo.toml"), "[package]\n")
            .await
            .unwrap();
        fs::write(root.join("source/integers/notes.txt"), "not servable")
            .await
            .unwrap();

        fs::create_dir_all(root.join("content")).await.unwrap();
        fs::write(root.join("content/vectors.html"), "<h1>Vectors</h1>")
            .await
            .unwrap();
        fs::create_dir_all(root.join("source/vectors")).await.unwrap();
        fs::write(root.join("source/vectors/README.md"), "# Vectors\n")
            .await
            .unwrap();

        let store = FsChapterStore::new(root);
        (dir, store)
    }

    #[tokio::test]
    async fn test_load_document_from_readme() {
        let (_dir, store) = fixture().await;

        let doc = store.load_document(&slug("integers")).await.unwrap();
        assert_eq!(doc.format, DocumentFormat::Markdown);
        assert_eq!(doc.content, "# Integers\n");
    }

    #[tokio::test]
    async fn test_prerendered_content_wins() {
        let (_dir, store) = fixture().await;

        let doc = store.load_document(&slug("vectors")).await.unwrap();
        assert_eq!(doc.format, DocumentFormat::Html);
        assert_eq!(doc.content, "<h1>Vectors</h1>");
    }

    #[tokio::test]
    async fn test_load_document_missing_chapter() {
        let (_dir, store) = fixture().await;

        let err = store.load_document(&slug("closures")).await.unwrap_err();
        assert!(matches!(err, StoreError::ChapterNotFound(_)));
    }

    #[tokio::test]
    async fn test_read_source_file() {
        let (_dir, store) = fixture().await;

        let file = store
            .read_source_file(&slug("integers"), &FileName::new("README.md").unwrap())
            .await
            .unwrap();
        assert_eq!(file.content, "# Integers\n");
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let (_dir, store) = fixture().await;

        let err = store
            .read_source_file(&slug("integers"), &FileName::new("gone.rs").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::FileNotFound(_)));
    }

    #[tokio::test]
    async fn test_read_file_from_missing_chapter() {
        let (_dir, store) = fixture().await;

        let err = store
            .read_source_file(&slug("closures"), &FileName::new("lib.rs").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::ChapterNotFound(_)));
    }

    #[tokio::test]
    async fn test_list_filters_and_sorts() {
        let (_dir, store) = fixture().await;

        let files = store.list_source_files(&slug("integers")).await.unwrap();
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        // notes.txt filtered out, src/ directory skipped, sorted by name
        assert_eq!(names, vec!["Cargo.toml", "README.md"]);
        assert!(files.iter().all(|f| f.size_bytes > 0));
    }

    #[tokio::test]
    async fn test_list_missing_chapter() {
        let (_dir, store) = fixture().await;

        let err = store.list_source_files(&slug("closures")).await.unwrap_err();
        assert!(matches!(err, StoreError::ChapterNotFound(_)));
    }
}
