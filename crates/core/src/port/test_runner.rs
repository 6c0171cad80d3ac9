// Test Runner Port
// Abstraction for executing a chapter's test suite out of process.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ChapterSlug, RunReport};

/// Runner errors
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Chapter not found: {0}")]
    ChapterNotFound(String),

    #[error("Spawn failed: {0}")]
    SpawnFailed(String),

    #[error("Test run timed out after {0}ms")]
    Timeout(i64),

    #[error("IO error: {0}")]
    Io(String),
}

/// Test runner trait
///
/// Implementations:
/// - SubprocessRunner: spawns the configured runner command in the
///   chapter's source directory with a bounded timeout
#[async_trait]
pub trait TestRunner: Send + Sync {
    /// Run the chapter's test suite and return a structured report
    ///
    /// # Errors
    /// - RunnerError::ChapterNotFound if the chapter directory is missing
    /// - RunnerError::SpawnFailed if the runner command cannot be started
    /// - RunnerError::Timeout if execution exceeds the configured bound
    async fn run(&self, slug: &ChapterSlug) -> Result<RunReport, RunnerError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::domain::RunStatus;
    use std::sync::{Arc, Mutex};

    /// Mock runner behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Report a passing run
        Pass,
        /// Report a failing run with the given exit code
        Fail(i32),
        /// Time out after N ms
        Timeout(i64),
        /// Fail to spawn with message
        SpawnError(String),
        /// Chapter directory missing on disk
        NotFound,
    }

    /// Mock test runner for testing
    pub struct MockTestRunner {
        behavior: Arc<Mutex<MockBehavior>>,
        call_count: Arc<Mutex<usize>>,
    }

    impl MockTestRunner {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior: Arc::new(Mutex::new(behavior)),
                call_count: Arc::new(Mutex::new(0)),
            }
        }

        pub fn new_pass() -> Self {
            Self::new(MockBehavior::Pass)
        }

        pub fn new_fail(exit_code: i32) -> Self {
            Self::new(MockBehavior::Fail(exit_code))
        }

        pub fn call_count(&self) -> usize {
            *self.call_count.lock().unwrap()
        }
    }

    #[async_trait]
    impl TestRunner for MockTestRunner {
        async fn run(&self, slug: &ChapterSlug) -> Result<RunReport, RunnerError> {
            *self.call_count.lock().unwrap() += 1;

            let behavior = self.behavior.lock().unwrap().clone();

            match behavior {
                MockBehavior::Pass => Ok(RunReport {
                    run_id: "mock-run".to_string(),
                    chapter: slug.clone(),
                    status: RunStatus::Passed,
                    exit_code: Some(0),
                    duration_ms: 10,
                    stdout: "test result: ok".to_string(),
                    stderr: String::new(),
                }),
                MockBehavior::Fail(code) => Ok(RunReport {
                    run_id: "mock-run".to_string(),
                    chapter: slug.clone(),
                    status: RunStatus::Failed,
                    exit_code: Some(code),
                    duration_ms: 10,
                    stdout: String::new(),
                    stderr: "test result: FAILED".to_string(),
                }),
                MockBehavior::Timeout(ms) => Err(RunnerError::Timeout(ms)),
                MockBehavior::SpawnError(msg) => Err(RunnerError::SpawnFailed(msg)),
                MockBehavior::NotFound => Err(RunnerError::ChapterNotFound(slug.to_string())),
            }
        }
    }
}
