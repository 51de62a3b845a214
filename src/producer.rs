//! Delayed Value Production
//!
//! The producer suspends the calling task on a runtime timer for the
//! configured delay, then resumes and yields the configured value. It
//! holds no shared state; repeated calls wait the same delay and yield
//! the same value.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::config::ProducerConfig;

/// Error from deadline-bounded production
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProduceError {
    /// The deadline elapsed before the configured delay did
    #[error("deadline of {deadline_ms}ms elapsed before the {delay_ms}ms production delay")]
    DeadlineExceeded {
        /// The deadline imposed by the caller (milliseconds)
        deadline_ms: u64,
        /// The configured production delay (milliseconds)
        delay_ms: u64,
    },
}

/// Produces a fixed value after a fixed delay
///
/// The configuration is immutable after construction; every call to
/// [`produce`](Self::produce) observes the same delay and value.
#[derive(Clone, Debug, Default)]
pub struct DelayedValueProducer {
    config: ProducerConfig,
}

impl DelayedValueProducer {
    /// Create a new producer from a configuration
    #[must_use]
    pub fn new(config: ProducerConfig) -> Self {
        Self { config }
    }

    /// The value this producer yields
    #[must_use]
    pub fn value(&self) -> i64 {
        self.config.value
    }

    /// The delay before the value is yielded
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.config.delay()
    }

    /// Wait for the configured delay, then yield the configured value
    ///
    /// Suspends the calling task on the runtime timer; dropping the
    /// returned future cancels the wait. The value never resolves before
    /// the delay has elapsed.
    pub async fn produce(&self) -> i64 {
        debug!(
            delay_ms = self.config.delay_ms,
            "waiting before producing value"
        );
        tokio::time::sleep(self.config.delay()).await;
        debug!(value = self.config.value, "value produced");
        self.config.value
    }

    /// Produce the value, failing if a deadline elapses first
    ///
    /// Maps a caller-imposed timeout onto an explicit error instead of a
    /// dropped future.
    pub async fn produce_within(&self, deadline: Duration) -> Result<i64, ProduceError> {
        match tokio::time::timeout(deadline, self.produce()).await {
            Ok(value) => Ok(value),
            Err(_) => Err(ProduceError::DeadlineExceeded {
                deadline_ms: deadline.as_millis() as u64,
                delay_ms: self.config.delay_ms,
            }),
        }
    }
}
