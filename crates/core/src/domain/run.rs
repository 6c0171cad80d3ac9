// Test Run Domain Models

use serde::{Deserialize, Serialize};

use crate::domain::chapter::ChapterSlug;

/// Run identifier (UUID v4)
pub type RunId = String;

/// Outcome of a completed test run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    Passed,
    Failed,
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStatus::Passed => write!(f, "PASSED"),
            RunStatus::Failed => write!(f, "FAILED"),
        }
    }
}

/// Structured result of one test run against a chapter
///
/// This is the binding contract of the whole system: exit code plus
/// captured stdout/stderr, produced within the configured time bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: RunId,
    pub chapter: ChapterSlug,
    pub status: RunStatus,
    /// None when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub duration_ms: i64,
    pub stdout: String,
    pub stderr: String,
}

impl RunReport {
    pub fn passed(&self) -> bool {
        self.status == RunStatus::Passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(status: RunStatus, exit_code: Option<i32>) -> RunReport {
        RunReport {
            run_id: "test-run-1".to_string(),
            chapter: ChapterSlug::new("integers").unwrap(),
            status,
            exit_code,
            duration_ms: 42,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    #[test]
    fn test_passed_helper() {
        assert!(report(RunStatus::Passed, Some(0)).passed());
        assert!(!report(RunStatus::Failed, Some(101)).passed());
    }

    #[test]
    fn test_status_serializes_screaming() {
        let json = serde_json::to_string(&RunStatus::Passed).unwrap();
        assert_eq!(json, "\"PASSED\"");
    }
}
