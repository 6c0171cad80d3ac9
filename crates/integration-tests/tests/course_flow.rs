//! End-to-end course flow against real adapters
//!
//! Wires CourseService to the filesystem store and the subprocess runner
//! over a temporary course directory, exercising the full path a browser
//! request takes below the HTTP layer.

use std::sync::Arc;

use praxis_core::application::CourseService;
use praxis_core::domain::{CourseStructure, DocumentFormat, RunStatus};
use praxis_core::error::AppError;
use praxis_core::port::id_provider::UuidProvider;
use praxis_core::port::time_provider::SystemTimeProvider;
use praxis_infra_fs::FsChapterStore;
use praxis_infra_system::{RunnerConfig, SubprocessRunner};

/// Build a course fixture where the "test suite" is a shell script,
/// keeping runs fast and toolchain-free.
fn fixture_service(script: &str) -> (tempfile::TempDir, CourseService) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    let chapter_dir = root.join("source/hello-world");
    std::fs::create_dir_all(&chapter_dir).unwrap();
    std::fs::write(chapter_dir.join("README.md"), "# Hello, world\n").unwrap();
    std::fs::write(chapter_dir.join("Cargo.toml"), "[package]\nname = \"hello\"\n").unwrap();

    let store = Arc::new(FsChapterStore::new(root));
    let runner = Arc::new(SubprocessRunner::new(
        root,
        RunnerConfig {
            command: vec!["sh".to_string(), "-c".to_string(), script.to_string()],
            timeout_ms: 5000,
            env_allowlist: vec!["PATH".to_string()],
        },
        Arc::new(SystemTimeProvider),
        Arc::new(UuidProvider),
    ));

    let service = CourseService::new(CourseStructure::standard(), store, runner);
    (dir, service)
}

#[tokio::test]
async fn test_chapter_document_and_files() {
    let (_dir, service) = fixture_service("true");

    let view = service.chapter("hello-world").await.unwrap();
    assert_eq!(view.meta.name, "Hello, world");
    assert_eq!(view.document.format, DocumentFormat::Markdown);
    assert!(view.document.content.starts_with("# Hello, world"));

    let files = service.list_files("hello-world").await.unwrap();
    let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Cargo.toml", "README.md"]);

    let file = service.source_file("hello-world", "README.md").await.unwrap();
    assert_eq!(file.content, "# Hello, world\n");
}

#[tokio::test]
async fn test_run_tests_reports_structured_result() {
    let (_dir, service) = fixture_service("echo running; echo oops 1>&2; exit 0");

    let report = service.run_tests("hello-world").await.unwrap();
    assert_eq!(report.status, RunStatus::Passed);
    assert_eq!(report.exit_code, Some(0));
    assert!(report.stdout.contains("running"));
    assert!(report.stderr.contains("oops"));
    assert!(report.duration_ms >= 0);
    // UUID run id
    assert_eq!(report.run_id.len(), 36);
}

#[tokio::test]
async fn test_failing_suite_is_a_report_not_an_error() {
    let (_dir, service) = fixture_service("echo 'test result: FAILED'; exit 101");

    let report = service.run_tests("hello-world").await.unwrap();
    assert_eq!(report.status, RunStatus::Failed);
    assert_eq!(report.exit_code, Some(101));
}

#[tokio::test]
async fn test_cataloged_chapter_without_source_dir() {
    // "integers" is in the catalog but the fixture only ships hello-world
    let (_dir, service) = fixture_service("true");

    let err = service.run_tests("integers").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_traversal_slug_never_touches_disk() {
    let (_dir, service) = fixture_service("true");

    let err = service.chapter("../../etc").await.unwrap_err();
    assert!(matches!(err, AppError::Domain(_)));

    let err = service
        .source_file("hello-world", "../../../etc/passwd")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Domain(_)));
}
