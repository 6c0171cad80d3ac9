// Praxis Infrastructure - System Adapters
// Implements: TestRunner, SystemProbe

pub mod subprocess_runner;
pub mod system_probe_impl;

pub use subprocess_runner::{RunnerConfig, SubprocessRunner};
pub use system_probe_impl::SystemProbeImpl;
