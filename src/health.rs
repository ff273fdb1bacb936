//! Bounded readiness polling for the backend.
//!
//! One attempt is made per interval until the probe reports ready or the
//! attempt budget is spent. Every kind of failure counts as "not yet ready".

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{sleep, Instant};

/// Failed attempts between progress callbacks.
pub const PROGRESS_EVERY: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Ready,
    NotReady(String),
}

#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn check(&self) -> ProbeOutcome;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Ready { elapsed: Duration, attempts: u32 },
    TimedOut { elapsed: Duration, attempts: u32 },
    /// No health capability was available; treated as ready.
    Skipped,
}

impl PollOutcome {
    pub fn is_ready(&self) -> bool {
        !matches!(self, PollOutcome::TimedOut { .. })
    }

    pub fn elapsed(&self) -> Duration {
        match self {
            PollOutcome::Ready { elapsed, .. } | PollOutcome::TimedOut { elapsed, .. } => *elapsed,
            PollOutcome::Skipped => Duration::ZERO,
        }
    }
}

pub struct HealthPoller {
    probe: Arc<dyn HealthProbe>,
    attempts: u32,
    interval: Duration,
}

impl HealthPoller {
    pub fn new(probe: Arc<dyn HealthProbe>, attempts: u32, interval: Duration) -> Self {
        Self {
            probe,
            attempts,
            interval,
        }
    }

    /// Polls until ready or `attempts` probes have failed. `on_progress`
    /// receives the attempt number and elapsed time every
    /// [`PROGRESS_EVERY`] failed attempts.
    pub async fn wait_ready<F>(&self, mut on_progress: F) -> PollOutcome
    where
        F: FnMut(u32, Duration),
    {
        let started = Instant::now();

        for attempt in 1..=self.attempts {
            match self.probe.check().await {
                ProbeOutcome::Ready => {
                    let elapsed = started.elapsed();
                    tracing::info!(attempt, elapsed_ms = elapsed.as_millis() as u64, "backend ready");
                    return PollOutcome::Ready {
                        elapsed,
                        attempts: attempt,
                    };
                }
                ProbeOutcome::NotReady(reason) => {
                    tracing::debug!(attempt, %reason, "backend not ready");
                }
            }

            if attempt % PROGRESS_EVERY == 0 {
                on_progress(attempt, started.elapsed());
            }

            sleep(self.interval).await;
        }

        let elapsed = started.elapsed();
        tracing::info!(attempts = self.attempts, elapsed_ms = elapsed.as_millis() as u64, "health check budget exhausted");
        PollOutcome::TimedOut {
            elapsed,
            attempts: self.attempts,
        }
    }
}
