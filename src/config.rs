//! Producer Configuration
//!
//! Configuration for the delayed value producer: how long to wait and
//! which value to yield. Defaults are one second and 42.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for [`DelayedValueProducer`](crate::DelayedValueProducer)
///
/// Both fields are configurable with defaults matching the standard
/// scenario: wait one second, produce 42.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerConfig {
    /// Delay before the value is produced (milliseconds)
    pub delay_ms: u64,

    /// The value to produce once the delay has elapsed
    pub value: i64,
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1_000,
            value: 42,
        }
    }
}

impl ProducerConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delay in milliseconds
    #[must_use]
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Set the produced value
    #[must_use]
    pub fn with_value(mut self, value: i64) -> Self {
        self.value = value;
        self
    }

    /// Load configuration from environment variables
    ///
    /// Reads `PRODUCER_DELAY_MS` and `PRODUCER_VALUE`. Absent or
    /// unparseable variables fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            delay_ms: std::env::var("PRODUCER_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.delay_ms),
            value: std::env::var("PRODUCER_VALUE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.value),
        }
    }

    /// Convert to Duration for the delay
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
