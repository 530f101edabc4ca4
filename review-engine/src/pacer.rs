//! Self-imposed backpressure for bulk processing.
//!
//! The hosting API quota is shared and low for unauthenticated callers, so
//! bulk items run strictly sequentially with a fixed pause between them.
//! The pacer is a policy object injected into the orchestrator so the
//! interval can be tuned (or zeroed in tests) without touching the workflow.
//! It is a fixed-interval gate, not adaptive to observed quota headers.

use std::time::Duration;

/// Waits a fixed interval between bulk items.
#[derive(Debug, Clone, Copy)]
pub struct FixedIntervalPacer {
    interval: Duration,
}

impl FixedIntervalPacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Production default: one second between items.
    pub fn default_bulk() -> Self {
        Self::new(Duration::from_secs(1))
    }

    /// No waiting; used by tests and single-item callers.
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Pauses for the configured interval.
    pub async fn pause(&self) {
        if !self.interval.is_zero() {
            tokio::time::sleep(self.interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn pause_sleeps_for_the_configured_interval() {
        let pacer = FixedIntervalPacer::new(Duration::from_secs(1));
        let before = tokio::time::Instant::now();
        pacer.pause().await;
        assert_eq!(before.elapsed(), Duration::from_secs(1));
    }

    #[tokio::test]
    async fn disabled_pacer_returns_immediately() {
        FixedIntervalPacer::disabled().pause().await;
    }
}
