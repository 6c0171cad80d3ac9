// System probe implementation (sysinfo)

use std::sync::Mutex;

use async_trait::async_trait;
use sysinfo::System;

use praxis_core::port::{SystemMetrics, SystemProbe};

const BYTES_PER_MB: u64 = 1024 * 1024;

/// sysinfo-backed system probe
pub struct SystemProbeImpl {
    // sysinfo wants &mut for refresh
    system: Mutex<System>,
}

impl SystemProbeImpl {
    pub fn new() -> Self {
        Self {
            system: Mutex::new(System::new()),
        }
    }
}

impl Default for SystemProbeImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SystemProbe for SystemProbeImpl {
    async fn get_metrics(&self) -> SystemMetrics {
        let mut system = self.system.lock().unwrap();
        system.refresh_cpu();
        system.refresh_memory();

        SystemMetrics {
            // First sample after startup reads 0.0, later calls are real
            cpu_usage_percent: system.global_cpu_info().cpu_usage(),
            memory_used_mb: system.used_memory() / BYTES_PER_MB,
            memory_total_mb: system.total_memory() / BYTES_PER_MB,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_metrics_are_sane() {
        let probe = SystemProbeImpl::new();
        let metrics = probe.get_metrics().await;

        assert!(metrics.cpu_usage_percent >= 0.0);
        assert!(metrics.memory_total_mb > 0);
        assert!(metrics.memory_used_mb <= metrics.memory_total_mb);
    }
}
