//! Subprocess runner edge cases
//!
//! The timeout bound and process cleanup are the riskiest behavior in the
//! system; exercise them against real processes.

use std::sync::Arc;
use std::time::Instant;

use praxis_core::domain::ChapterSlug;
use praxis_core::port::id_provider::UuidProvider;
use praxis_core::port::time_provider::SystemTimeProvider;
use praxis_core::port::{RunnerError, TestRunner};
use praxis_infra_system::{RunnerConfig, SubprocessRunner};

fn runner_with(script: &str, timeout_ms: u64) -> (tempfile::TempDir, SubprocessRunner) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("source/iteration")).unwrap();

    let runner = SubprocessRunner::new(
        dir.path(),
        RunnerConfig {
            command: vec!["sh".to_string(), "-c".to_string(), script.to_string()],
            timeout_ms,
            env_allowlist: vec!["PATH".to_string()],
        },
        Arc::new(SystemTimeProvider),
        Arc::new(UuidProvider),
    );
    (dir, runner)
}

fn slug(s: &str) -> ChapterSlug {
    ChapterSlug::new(s).unwrap()
}

#[tokio::test]
async fn test_timeout_fires_near_the_bound() {
    let (_dir, runner) = runner_with("sleep 30", 200);

    let start = Instant::now();
    let err = runner.run(&slug("iteration")).await.unwrap_err();
    let elapsed = start.elapsed();

    assert!(matches!(err, RunnerError::Timeout(200)));
    // Bound plus the SIGTERM grace window, nowhere near the 30s sleep
    assert!(elapsed.as_secs() < 10, "took {:?}", elapsed);
}

#[tokio::test]
async fn test_large_output_is_captured() {
    // 10k lines through the pipe must not deadlock the wait
    let (_dir, runner) = runner_with("seq 1 10000", 10_000);

    let report = runner.run(&slug("iteration")).await.unwrap();
    assert!(report.stdout.lines().count() == 10_000);
    assert!(report.stdout.contains("\n9999\n"));
}

#[tokio::test]
async fn test_env_is_clamped_to_allowlist() {
    std::env::set_var("PRAXIS_TEST_SECRET", "do-not-leak");

    let (_dir, runner) = runner_with("env", 5000);

    let report = runner.run(&slug("iteration")).await.unwrap();
    assert!(!report.stdout.contains("PRAXIS_TEST_SECRET"));
    assert!(report.stdout.contains("PATH="));
}

#[tokio::test]
async fn test_signal_killed_process_has_no_exit_code() {
    // The shell kills itself with SIGKILL; exit_code stays None on unix
    let (_dir, runner) = runner_with("kill -9 $$", 5000);

    let report = runner.run(&slug("iteration")).await.unwrap();
    assert!(!report.passed());
    #[cfg(unix)]
    assert_eq!(report.exit_code, None);
}

#[tokio::test]
async fn test_concurrent_runs_do_not_interfere() {
    let (_dir_a, runner_a) = runner_with("echo alpha", 5000);
    let (_dir_b, runner_b) = runner_with("echo beta", 5000);

    let slug_a = slug("iteration");
    let slug_b = slug("iteration");
    let (a, b) = tokio::join!(runner_a.run(&slug_a), runner_b.run(&slug_b));

    assert!(a.unwrap().stdout.contains("alpha"));
    assert!(b.unwrap().stdout.contains("beta"));
}
