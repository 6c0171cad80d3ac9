// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid chapter slug: {0}")]
    InvalidSlug(String),

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("Chapter not found: {0}")]
    ChapterNotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
