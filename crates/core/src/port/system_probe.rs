// System resource monitoring port
// Backs the health endpoint and CLI status output.

use async_trait::async_trait;

/// System resource metrics
#[derive(Debug, Clone)]
pub struct SystemMetrics {
    pub cpu_usage_percent: f32,
    pub memory_used_mb: u64,
    pub memory_total_mb: u64,
}

/// System probe port for resource monitoring
#[async_trait]
pub trait SystemProbe: Send + Sync {
    /// Get current system metrics
    async fn get_metrics(&self) -> SystemMetrics;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;

    /// Mock SystemProbe for testing
    pub struct MockSystemProbe {
        metrics: SystemMetrics,
    }

    impl MockSystemProbe {
        pub fn new(cpu_usage_percent: f32) -> Self {
            Self {
                metrics: SystemMetrics {
                    cpu_usage_percent,
                    memory_used_mb: 1024,
                    memory_total_mb: 2048,
                },
            }
        }
    }

    #[async_trait]
    impl SystemProbe for MockSystemProbe {
        async fn get_metrics(&self) -> SystemMetrics {
            self.metrics.clone()
        }
    }
}
