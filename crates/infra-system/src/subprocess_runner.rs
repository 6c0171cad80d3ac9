// Subprocess test runner
// Spawns the configured runner command in a chapter's source directory
// with environment allowlisting and a bounded timeout. This is the one
// process boundary of the whole system.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{info, warn};

use praxis_core::domain::{ChapterSlug, RunReport, RunStatus};
use praxis_core::port::{IdProvider, RunnerError, TestRunner, TimeProvider};

/// Wait after SIGTERM before escalating to SIGKILL
#[cfg(unix)]
const GRACEFUL_KILL_TIMEOUT_MS: u64 = 2000;

/// Runner configuration
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Runner command, program first (default: `cargo test`)
    pub command: Vec<String>,
    /// Hard bound on a single run
    pub timeout_ms: u64,
    /// Environment variables passed through to the child
    pub env_allowlist: Vec<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            command: ["cargo", "test", "--quiet", "--color", "never"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            timeout_ms: 30_000,
            env_allowlist: ["PATH", "HOME", "USER", "CARGO_HOME", "RUSTUP_HOME"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Exit status plus drained pipe contents of a finished run
struct CapturedOutput {
    status: std::process::ExitStatus,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

/// Read a child pipe to completion
async fn drain<R: tokio::io::AsyncRead + Unpin>(reader: Option<R>) -> Vec<u8> {
    use tokio::io::AsyncReadExt;

    let mut buf = Vec::new();
    if let Some(mut reader) = reader {
        let _ = reader.read_to_end(&mut buf).await;
    }
    buf
}

/// Test runner that shells out to the configured command
pub struct SubprocessRunner {
    course_root: PathBuf,
    config: RunnerConfig,
    time_provider: Arc<dyn TimeProvider>,
    id_provider: Arc<dyn IdProvider>,
}

impl SubprocessRunner {
    pub fn new(
        course_root: impl Into<PathBuf>,
        config: RunnerConfig,
        time_provider: Arc<dyn TimeProvider>,
        id_provider: Arc<dyn IdProvider>,
    ) -> Self {
        Self {
            course_root: course_root.into(),
            config,
            time_provider,
            id_provider,
        }
    }

    /// Keep only allowlisted environment variables
    fn filter_env(
        &self,
        vars: impl Iterator<Item = (String, String)>,
    ) -> Vec<(String, String)> {
        vars.filter(|(k, _)| self.config.env_allowlist.contains(k))
            .collect()
    }

    async fn spawn_and_wait(
        &self,
        slug: &ChapterSlug,
        working_dir: &std::path::Path,
    ) -> Result<CapturedOutput, RunnerError> {
        let (program, args) = self
            .config
            .command
            .split_first()
            .ok_or_else(|| RunnerError::SpawnFailed("empty runner command".to_string()))?;

        let filtered_env = self.filter_env(std::env::vars());

        let mut child = Command::new(program)
            .args(args)
            .env_clear()
            .envs(filtered_env)
            .current_dir(working_dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Backstop: never leave a runner behind if this future is dropped
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| RunnerError::SpawnFailed(format!("{}: {}", program, e)))?;

        let pid = child.id();

        // Drain the pipes concurrently so a chatty suite can never fill
        // the pipe buffer and deadlock against our wait.
        let stdout_task = tokio::spawn(drain(child.stdout.take()));
        let stderr_task = tokio::spawn(drain(child.stderr.take()));

        match timeout(Duration::from_millis(self.config.timeout_ms), child.wait()).await {
            Ok(Ok(status)) => {
                let stdout = stdout_task.await.unwrap_or_default();
                let stderr = stderr_task.await.unwrap_or_default();
                Ok(CapturedOutput {
                    status,
                    stdout,
                    stderr,
                })
            }
            Ok(Err(e)) => Err(RunnerError::Io(e.to_string())),
            Err(_) => {
                warn!(
                    chapter = %slug,
                    timeout_ms = self.config.timeout_ms,
                    "Test run exceeded bound, terminating"
                );
                #[cfg(unix)]
                terminate(&mut child, pid).await;
                #[cfg(not(unix))]
                let _ = child.kill().await;
                stdout_task.abort();
                stderr_task.abort();
                Err(RunnerError::Timeout(self.config.timeout_ms as i64))
            }
        }
    }

    fn build_report(&self, slug: &ChapterSlug, output: CapturedOutput, duration_ms: i64) -> RunReport {
        let status = if output.status.success() {
            RunStatus::Passed
        } else {
            RunStatus::Failed
        };

        RunReport {
            run_id: self.id_provider.generate_id(),
            chapter: slug.clone(),
            status,
            exit_code: output.status.code(),
            duration_ms,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

#[async_trait]
impl TestRunner for SubprocessRunner {
    async fn run(&self, slug: &ChapterSlug) -> Result<RunReport, RunnerError> {
        let working_dir = self.course_root.join("source").join(slug.as_str());
        match tokio::fs::metadata(&working_dir).await {
            Ok(m) if m.is_dir() => {}
            _ => return Err(RunnerError::ChapterNotFound(slug.to_string())),
        }

        let start_time = self.time_provider.now_millis();

        info!(
            chapter = %slug,
            command = ?self.config.command,
            working_dir = %working_dir.display(),
            timeout_ms = self.config.timeout_ms,
            "Starting test run"
        );

        let output = self.spawn_and_wait(slug, &working_dir).await?;
        let duration_ms = self.time_provider.now_millis() - start_time;

        let report = self.build_report(slug, output, duration_ms);

        info!(
            chapter = %slug,
            run_id = %report.run_id,
            duration_ms = %duration_ms,
            exit_code = ?report.exit_code,
            status = %report.status,
            "Test run completed"
        );

        Ok(report)
    }
}

/// Kill with SIGTERM first, then SIGKILL if the process lingers
///
/// Polls `try_wait` rather than signal 0: a terminated-but-unreaped
/// child still answers signals, so signal 0 never observes the exit.
/// Every return path leaves the child reaped.
#[cfg(unix)]
async fn terminate(child: &mut tokio::process::Child, pid: Option<u32>) {
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;

    let Some(raw_pid) = pid else {
        // Already reaped by the runtime
        let _ = child.kill().await;
        return;
    };
    let nix_pid = Pid::from_raw(raw_pid as i32);

    info!(pid = %raw_pid, "Sending SIGTERM");
    if kill(nix_pid, Signal::SIGTERM).is_err() {
        let _ = child.wait().await;
        return;
    }

    let deadline = Duration::from_millis(GRACEFUL_KILL_TIMEOUT_MS);
    let start = std::time::Instant::now();
    loop {
        tokio::time::sleep(Duration::from_millis(50)).await;

        match child.try_wait() {
            Ok(Some(status)) => {
                info!(pid = %raw_pid, status = %status, "Process exited after SIGTERM");
                return;
            }
            Ok(None) => {}
            Err(_) => break,
        }

        if start.elapsed() > deadline {
            warn!(pid = %raw_pid, "Process did not exit after SIGTERM, sending SIGKILL");
            break;
        }
    }

    let _ = kill(nix_pid, Signal::SIGKILL);
    let _ = child.wait().await;
}
