//! Delayed Value Production
//!
//! This crate provides one asynchronous capability: after a fixed delay,
//! produce a fixed integer value. Both the delay and the value are
//! configurable and default to 1000 milliseconds and 42.
//!
//! The producer suspends the calling task on a runtime timer; it holds no
//! shared state and performs no coordination, so it can be awaited from
//! any worker and yields the same value every time.
//!
//! # Key Types
//!
//! - [`DelayedValueProducer`]: waits, then yields the configured value
//! - [`ProducerConfig`]: delay and value configuration
//! - [`ProduceError`]: deadline errors from [`DelayedValueProducer::produce_within`]
//!
//! # Quick Start
//!
//! ```ignore
//! use delayed_value::{DelayedValueProducer, ProducerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let producer = DelayedValueProducer::new(ProducerConfig::default());
//!     let value = producer.produce().await;
//!     assert_eq!(value, 42);
//! }
//! ```
//!
//! # Module Overview
//!
//! - [`config`]: Producer configuration (delay, value)
//! - [`producer`]: The delayed value producer

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod producer;

// Re-exports for convenience
pub use config::ProducerConfig;
pub use producer::{DelayedValueProducer, ProduceError};
