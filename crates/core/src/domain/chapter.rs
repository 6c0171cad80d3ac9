// Chapter Domain Models
// Slugs and file names are validated at construction so that nothing
// path-shaped ever reaches an adapter unchecked.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// File extensions the viewer is allowed to serve
pub const SERVABLE_EXTENSIONS: &[&str] = &["rs", "md", "toml"];

/// Validated chapter identifier (e.g. "hello-world")
///
/// Lowercase alphanumerics and interior hyphens only. A slug can never
/// contain a path separator or `..`, so it is safe to join onto the
/// course root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChapterSlug(String);

impl ChapterSlug {
    pub fn new(s: impl Into<String>) -> Result<Self, DomainError> {
        let s = s.into();
        if s.is_empty() {
            return Err(DomainError::InvalidSlug("empty slug".to_string()));
        }
        if s.starts_with('-') || s.ends_with('-') {
            return Err(DomainError::InvalidSlug(s));
        }
        if !s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
            return Err(DomainError::InvalidSlug(s));
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ChapterSlug {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ChapterSlug> for String {
    fn from(slug: ChapterSlug) -> Self {
        slug.0
    }
}

impl std::fmt::Display for ChapterSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated source file name (single path component, servable extension)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FileName(String);

impl FileName {
    pub fn new(s: impl Into<String>) -> Result<Self, DomainError> {
        let s = s.into();
        if s.is_empty() || s.starts_with('.') {
            return Err(DomainError::InvalidFileName(s));
        }
        if s.contains('/') || s.contains('\\') || s.contains("..") {
            return Err(DomainError::InvalidFileName(s));
        }
        let ext = s.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
        if !SERVABLE_EXTENSIONS.contains(&ext) {
            return Err(DomainError::InvalidFileName(s));
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FileName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<FileName> for String {
    fn from(name: FileName) -> Self {
        name.0
    }
}

impl std::fmt::Display for FileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a chapter document is stored on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentFormat {
    /// Pre-rendered page from the content directory
    Html,
    /// Chapter README, served as raw markdown (rendering is the client's job)
    Markdown,
}

/// A chapter's narrative document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterDocument {
    pub slug: ChapterSlug,
    pub format: DocumentFormat,
    pub content: String,
}

/// A source file served to the viewer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    pub name: FileName,
    pub content: String,
}

/// Listing entry for a chapter's source directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFileInfo {
    pub name: String,
    pub size_bytes: u64,
    /// Last modification time, epoch ms
    pub modified_ms: i64,
}
