// Domain Models

pub mod catalog;
pub mod chapter;
pub mod error;
pub mod run;

pub use catalog::{ChapterMeta, CourseStructure, Section};
pub use chapter::{ChapterDocument, ChapterSlug, DocumentFormat, FileName, SourceFile, SourceFileInfo, SERVABLE_EXTENSIONS};
pub use error::DomainError;
pub use run::{RunReport, RunStatus};
