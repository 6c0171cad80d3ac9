// Ports (hexagonal architecture)
// Abstractions implemented by the infra crates.

pub mod chapter_store;
pub mod id_provider;
pub mod system_probe;
pub mod test_runner;
pub mod time_provider;

pub use chapter_store::{ChapterStore, StoreError};
pub use id_provider::IdProvider;
pub use system_probe::{SystemMetrics, SystemProbe};
pub use test_runner::{RunnerError, TestRunner};
pub use time_provider::TimeProvider;
