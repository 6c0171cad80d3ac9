// Praxis Infrastructure - Filesystem Adapters
// Implements: ChapterStore

pub mod chapter_store;

pub use chapter_store::FsChapterStore;
